use std::collections::BTreeSet;
use std::path::Path;

use crate::chart::{ChartConfig, ChartHandle};
use crate::config::ExplorerConfig;
use crate::data::filter::visible_names;
use crate::data::loader::load_file;
use crate::data::model::{DatasetType, FdiDataset, NormalizedArea};
use crate::data::selection::Selection;
use crate::scale::AxisScale;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ExplorerConfig,

    /// Loaded document (None until a file is loaded).
    pub dataset: Option<FdiDataset>,

    /// Corpus currently listed and plotted.
    pub dataset_type: DatasetType,

    /// y-axis mode; mirrored into the chart once it exists.
    pub scale: AxisScale,

    /// Ticked areas, by name.
    pub selection: Selection,

    /// Text in the search box.
    pub search_query: String,

    /// Names listed under the current search (cached).
    pub listed: BTreeSet<String>,

    /// Created on the first successful load.
    pub chart: Option<ChartHandle>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            dataset: None,
            dataset_type: config.initial_dataset,
            scale: config.initial_scale,
            selection: Selection::new(config.default_selection.iter().cloned()),
            search_query: String::new(),
            listed: BTreeSet::new(),
            chart: None,
            status_message: None,
            loading: false,
            config,
        }
    }

    /// Load a document from disk, reporting failures in the status line.
    pub fn open_path(&mut self, path: &Path) {
        self.loading = true;
        match load_file(path, self.config.years()) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// Ingest a newly loaded document and (re)fill the chart.
    pub fn set_dataset(&mut self, dataset: FdiDataset) {
        if self.chart.is_none() {
            self.chart = Some(ChartHandle::create(ChartConfig {
                scale: self.scale,
                years: dataset.years,
                ..ChartConfig::default()
            }));
        } else if let Some(old) = self.chart.take() {
            // The year range is fixed per chart; a new document gets a new one.
            let config = ChartConfig {
                years: dataset.years,
                ..old.config().clone()
            };
            old.destroy();
            self.chart = Some(ChartHandle::create(config));
        }
        if dataset.areas(self.dataset_type).is_empty() {
            let present = dataset
                .dataset_types()
                .find(|dt| !dataset.areas(*dt).is_empty());
            if let Some(present) = present {
                log::info!("No {} rows in document, showing {present}", self.dataset_type);
                self.dataset_type = present;
            }
        }

        self.dataset = Some(dataset);
        self.reload_chart();
        self.refilter();
        self.status_message = None;
        self.loading = false;
    }

    /// Areas of the active corpus in source order.
    pub fn active_areas(&self) -> &[NormalizedArea] {
        self.dataset
            .as_ref()
            .map(|ds| ds.areas(self.dataset_type))
            .unwrap_or(&[])
    }

    /// Switch between inflows and outflows; the selection carries over.
    pub fn set_dataset_type(&mut self, dataset_type: DatasetType) {
        if self.dataset_type == dataset_type {
            return;
        }
        log::info!("Switching dataset to {dataset_type}");
        self.dataset_type = dataset_type;
        self.reload_chart();
        self.refilter();
    }

    pub fn set_scale(&mut self, scale: AxisScale) {
        self.scale = scale;
        if let Some(chart) = &mut self.chart {
            chart.update(scale);
        }
    }

    /// Tick or untick an area in the list or legend.
    pub fn toggle_selected(&mut self, name: &str) {
        let selected = self.selection.toggle(name);
        if let Some(chart) = &mut self.chart {
            chart.set_series_visible(name, selected);
        }
        log::debug!("{name} {}", if selected { "selected" } else { "deselected" });
    }

    /// Untick an area, e.g. from its legend entry.
    pub fn deselect(&mut self, name: &str) {
        self.selection.set(name, false);
        if let Some(chart) = &mut self.chart {
            chart.set_series_visible(name, false);
        }
        log::debug!("{name} deselected");
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.refilter();
    }

    /// Whether an area shows up in the list under the current search.
    pub fn is_listed(&self, name: &str) -> bool {
        self.listed.contains(name)
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Recompute `listed` after a search or corpus change.
    fn refilter(&mut self) {
        self.listed = visible_names(self.active_areas(), &self.search_query);
    }

    fn reload_chart(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        if let Some(chart) = &mut self.chart {
            chart.load_areas(dataset.areas(self.dataset_type), &self.selection);
        }
    }
}
