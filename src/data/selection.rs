use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Selection: which areas are plotted
// ---------------------------------------------------------------------------

/// Names of the areas the user has ticked. Keyed by name so the selection
/// survives switching between inflows and outflows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<String>,
}

impl Selection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Flip one area and return its new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.selected.remove(name) {
            false
        } else {
            self.selected.insert(name.to_string());
            true
        }
    }

    pub fn set(&mut self, name: &str, selected: bool) {
        if selected {
            self.selected.insert(name.to_string());
        } else {
            self.selected.remove(name);
        }
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}
