//! FDI Data Explorer: foreign-direct-investment flows by country and region.
//!
//! The library holds everything below the UI: the data document loader, the
//! country/region hierarchy, search and selection, the negative-safe log
//! axis, and the chart handle the viewer draws from.

pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod format;
pub mod scale;
pub mod state;

pub use chart::{ChartConfig, ChartHandle, ChartSeries, PlotLine};
pub use config::ExplorerConfig;
pub use data::hierarchy::build_hierarchy;
pub use data::model::{AreaKind, AreaRecord, DatasetType, FdiDataset, NormalizedArea, YearRange};
pub use data::validate::ValidationError;
pub use scale::{AxisConversion, AxisScale, LogAxisSample, from_plot_position, to_plot_position};
