use std::collections::BTreeSet;

use super::model::NormalizedArea;

// ---------------------------------------------------------------------------
// Search filter: which list entries are shown for a query
// ---------------------------------------------------------------------------

/// Names of the areas to list for a search `query`.
///
/// * Blank query → every area is listed.
/// * Otherwise an area is listed when its name contains the query
///   (case-insensitive), and every ancestor of a listed match is listed too
///   so the match keeps its context in the tree.
pub fn visible_names(areas: &[NormalizedArea], query: &str) -> BTreeSet<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return areas.iter().map(|a| a.name.clone()).collect();
    }

    let mut visible = BTreeSet::new();
    for area in areas {
        if area.name.to_lowercase().contains(&needle) {
            visible.insert(area.name.clone());
            visible.extend(area.ancestors.iter().cloned());
        }
    }
    visible
}
