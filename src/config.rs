use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::data::model::{DatasetType, YearRange};
use crate::scale::AxisScale;

// ---------------------------------------------------------------------------
// Explorer configuration
// ---------------------------------------------------------------------------

/// Startup settings. Layered as: defaults → optional JSON file named by
/// `FDI_CONFIG` → `FDI_*` environment variables → first CLI argument.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Data document opened at startup, if any.
    pub data_path: Option<PathBuf>,
    pub start_year: i32,
    pub end_year: i32,
    /// Areas ticked before the user touches anything.
    pub default_selection: Vec<String>,
    pub initial_dataset: DatasetType,
    pub initial_scale: AxisScale,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        let years = YearRange::default();
        Self {
            data_path: None,
            start_year: years.start,
            end_year: years.end,
            default_selection: vec!["World".to_string()],
            initial_dataset: DatasetType::Inflows,
            initial_scale: AxisScale::Linear,
        }
    }
}

impl ExplorerConfig {
    /// Build the configuration from the process environment and arguments.
    pub fn from_env(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let base = match std::env::var("FDI_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok(), args)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Apply environment lookups and CLI arguments on top of `self`.
    pub fn with_overrides<F>(mut self, env: F, args: impl IntoIterator<Item = String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = env("FDI_DATA") {
            self.data_path = Some(PathBuf::from(path));
        }
        if let Some(year) = env("FDI_START_YEAR") {
            self.start_year = year
                .trim()
                .parse::<i32>()
                .with_context(|| format!("FDI_START_YEAR={year:?} is not a year"))?;
        }
        if let Some(year) = env("FDI_END_YEAR") {
            self.end_year = year
                .trim()
                .parse::<i32>()
                .with_context(|| format!("FDI_END_YEAR={year:?} is not a year"))?;
        }
        if let Some(path) = args.into_iter().next() {
            self.data_path = Some(PathBuf::from(path));
        }

        if self.end_year < self.start_year {
            bail!(
                "Year range {}–{} is empty",
                self.start_year,
                self.end_year
            );
        }
        Ok(self)
    }

    pub fn years(&self) -> YearRange {
        YearRange::new(self.start_year, self.end_year)
    }
}
