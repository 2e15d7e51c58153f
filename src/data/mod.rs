/// Data layer: core types, ingestion, hierarchy and search.
///
/// Architecture:
/// ```text
///  data.json / data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse document → RawAreaRow per dataset type
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  RawAreaRow → AreaRecord (or ValidationError)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ hierarchy  │  ancestor stack walk → NormalizedArea
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  search query → visible names (matches + ancestors)
///   └──────────┘
/// ```

pub mod filter;
pub mod hierarchy;
pub mod loader;
pub mod model;
pub mod selection;
pub mod validate;
