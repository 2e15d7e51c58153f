use std::cmp::Ordering;

use eframe::egui::Color32;

use crate::color::{series_color, series_colors};
use crate::data::model::{NormalizedArea, YearRange};
use crate::data::selection::Selection;
use crate::scale::{AxisConversion, AxisScale};

// ---------------------------------------------------------------------------
// Chart configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub y_axis_label: String,
    /// Conversion strategy for the y-axis.
    pub scale: AxisScale,
    pub years: YearRange,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "By region and economy".to_string(),
            y_axis_label: "Millions of dollars".to_string(),
            scale: AxisScale::Linear,
            years: YearRange::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub name: String,
    /// Data values, one per year of the chart's range.
    pub values: Vec<f64>,
    pub color: Color32,
    pub visible: bool,
}

/// A series converted to plot space, ready for the renderer.
#[derive(Debug, Clone)]
pub struct PlotLine {
    pub name: String,
    pub color: Color32,
    /// `[year, plot y]`; absent and non-finite values are skipped.
    pub points: Vec<[f64; 2]>,
}

// ---------------------------------------------------------------------------
// Chart handle
// ---------------------------------------------------------------------------

/// An explicitly owned chart. Created once, then updated through `&mut self`
/// and finally consumed by [`ChartHandle::destroy`].
#[derive(Debug)]
pub struct ChartHandle {
    config: ChartConfig,
    series: Vec<ChartSeries>,
}

impl ChartHandle {
    pub fn create(config: ChartConfig) -> Self {
        log::debug!(
            "Creating chart '{}' with {:?} y-axis",
            config.title,
            config.scale
        );
        Self {
            config,
            series: Vec::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn scale(&self) -> AxisScale {
        self.config.scale
    }

    /// Switch the y-axis conversion strategy.
    pub fn update(&mut self, scale: AxisScale) {
        if self.config.scale != scale {
            log::debug!("Chart y-axis {:?} → {:?}", self.config.scale, scale);
            self.config.scale = scale;
        }
    }

    pub fn add_series(&mut self, name: impl Into<String>, values: Vec<f64>, visible: bool) {
        let color = series_color(self.series.len());
        self.series.push(ChartSeries {
            name: name.into(),
            values,
            color,
            visible,
        });
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
    }

    /// Replace every series with one per area, visible when selected.
    pub fn load_areas(&mut self, areas: &[NormalizedArea], selection: &Selection) {
        let colors = series_colors(areas.len());
        self.series = areas
            .iter()
            .zip(colors)
            .map(|(area, color)| ChartSeries {
                name: area.name.clone(),
                values: area.series.clone(),
                color,
                visible: selection.is_selected(&area.name),
            })
            .collect();
        log::debug!(
            "Chart holds {} series, {} visible",
            self.series.len(),
            self.series.iter().filter(|s| s.visible).count()
        );
    }

    /// Show or hide a series by name; returns whether it exists.
    pub fn set_series_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.series.iter_mut().find(|s| s.name == name) {
            Some(series) => {
                series.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Visible series in plot space through the active y-axis strategy.
    pub fn visible_lines(&self) -> Vec<PlotLine> {
        let scale = self.config.scale;
        self.series
            .iter()
            .filter(|s| s.visible)
            .map(|s| PlotLine {
                name: s.name.clone(),
                color: s.color,
                points: self
                    .config
                    .years
                    .years()
                    .zip(&s.values)
                    .filter(|(_, v)| v.is_finite())
                    .map(|(year, &v)| [year as f64, scale.to_plot(v)])
                    .collect(),
            })
            .collect()
    }

    /// Data value at a y-axis coordinate.
    pub fn value_at(&self, position: f64) -> f64 {
        self.config.scale.from_plot(position)
    }

    /// `(name, colour)` of every visible series, in series order.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.series
            .iter()
            .filter(|s| s.visible)
            .map(|s| (s.name.clone(), s.color))
            .collect()
    }

    /// Year under a plot x coordinate, if it falls inside the chart's range.
    pub fn year_at(&self, x: f64) -> Option<i32> {
        if !x.is_finite() {
            return None;
        }
        let year = x.round() as i32;
        self.config.years.index_of(year).map(|_| year)
    }

    /// Visible series' values for one year, largest first.
    pub fn tooltip_rows(&self, year: i32) -> Vec<(String, f64, Color32)> {
        let Some(index) = self.config.years.index_of(year) else {
            return Vec::new();
        };
        let mut rows: Vec<(String, f64, Color32)> = self
            .series
            .iter()
            .filter(|s| s.visible)
            .filter_map(|s| {
                let v = *s.values.get(index)?;
                v.is_finite().then(|| (s.name.clone(), v, s.color))
            })
            .collect();
        rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        rows
    }

    pub fn destroy(self) {
        log::debug!(
            "Destroying chart '{}' ({} series)",
            self.config.title,
            self.series.len()
        );
    }
}
