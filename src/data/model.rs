use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DatasetType – which corpus of the data document is active
// ---------------------------------------------------------------------------

/// The two FDI corpora shipped in one data document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DatasetType {
    #[serde(rename = "fdi_inflows")]
    Inflows,
    #[serde(rename = "fdi_outflows")]
    Outflows,
}

impl DatasetType {
    pub const ALL: [DatasetType; 2] = [DatasetType::Inflows, DatasetType::Outflows];

    /// Key of this corpus in the data document.
    pub fn key(self) -> &'static str {
        match self {
            DatasetType::Inflows => "fdi_inflows",
            DatasetType::Outflows => "fdi_outflows",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dt| dt.key() == key)
    }

    /// Short button label.
    pub fn label(self) -> &'static str {
        match self {
            DatasetType::Inflows => "Inflows",
            DatasetType::Outflows => "Outflows",
        }
    }
}

impl Default for DatasetType {
    fn default() -> Self {
        DatasetType::Inflows
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// YearRange – the fixed contiguous range every series is indexed by
// ---------------------------------------------------------------------------

/// Inclusive range of years; `series[i]` holds the value for `start + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 1990,
            end: 2021,
        }
    }
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Number of years covered (0 when `end < start`).
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    /// Position of `year` within a series, if covered.
    pub fn index_of(&self, year: i32) -> Option<usize> {
        if year < self.start || year > self.end {
            return None;
        }
        Some((year - self.start) as usize)
    }
}

// ---------------------------------------------------------------------------
// AreaRecord / NormalizedArea
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    Region,
    Country,
}

/// One validated row of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRecord {
    pub name: String,
    /// Indentation depth in the source table (0 = root).
    pub raw_level: u32,
    pub kind: AreaKind,
    /// One value per year of the dataset's [`YearRange`]; absent = NaN.
    pub series: Vec<f64>,
}

impl AreaRecord {
    pub fn new(name: impl Into<String>, raw_level: u32, kind: AreaKind) -> Self {
        Self {
            name: name.into(),
            raw_level,
            kind,
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Vec<f64>) -> Self {
        self.series = series;
        self
    }
}

/// An [`AreaRecord`] with its resolved chain of ancestor names.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedArea {
    pub name: String,
    pub raw_level: u32,
    pub kind: AreaKind,
    pub series: Vec<f64>,
    /// Root first, immediate parent last.
    pub ancestors: Vec<String>,
}

impl NormalizedArea {
    pub fn from_record(record: AreaRecord, ancestors: Vec<String>) -> Self {
        Self {
            name: record.name,
            raw_level: record.raw_level,
            kind: record.kind,
            series: record.series,
            ancestors,
        }
    }

    pub fn is_region(&self) -> bool {
        self.kind == AreaKind::Region
    }

    /// Indentation steps for list rendering; the root and its children share
    /// the left margin.
    pub fn indent(&self) -> u32 {
        self.raw_level.saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// FdiDataset – the complete loaded document
// ---------------------------------------------------------------------------

/// Every corpus of a loaded document, each already run through the
/// hierarchy builder.
#[derive(Debug, Clone, Default)]
pub struct FdiDataset {
    pub years: YearRange,
    by_type: BTreeMap<DatasetType, Vec<NormalizedArea>>,
}

impl FdiDataset {
    pub fn new(years: YearRange) -> Self {
        Self {
            years,
            by_type: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, dataset_type: DatasetType, areas: Vec<NormalizedArea>) {
        self.by_type.insert(dataset_type, areas);
    }

    /// Areas of one corpus in source order (empty if the corpus was absent).
    pub fn areas(&self, dataset_type: DatasetType) -> &[NormalizedArea] {
        self.by_type
            .get(&dataset_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn find(&self, dataset_type: DatasetType, name: &str) -> Option<&NormalizedArea> {
        self.areas(dataset_type).iter().find(|a| a.name == name)
    }

    /// Corpora present in the document.
    pub fn dataset_types(&self) -> impl Iterator<Item = DatasetType> + '_ {
        self.by_type.keys().copied()
    }

    /// Total number of areas across all corpora.
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_indexes_series_positions() {
        let years = YearRange::default();
        assert_eq!(years.len(), 32);
        assert_eq!(years.index_of(1990), Some(0));
        assert_eq!(years.index_of(2021), Some(31));
        assert_eq!(years.index_of(1989), None);
        assert_eq!(years.index_of(2022), None);
        assert!(YearRange::new(2000, 1999).is_empty());
    }

    #[test]
    fn dataset_type_keys() {
        assert_eq!(DatasetType::from_key("fdi_outflows"), Some(DatasetType::Outflows));
        assert_eq!(DatasetType::from_key("population"), None);
        assert_eq!(DatasetType::Inflows.to_string(), "fdi_inflows");
    }

    #[test]
    fn missing_corpus_reads_as_empty() {
        let ds = FdiDataset::new(YearRange::default());
        assert!(ds.areas(DatasetType::Outflows).is_empty());
        assert!(ds.is_empty());
    }
}
