use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::hierarchy::build_hierarchy;
use super::model::{DatasetType, FdiDataset, YearRange};
use super::validate::{RawAreaRow, validate_row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an FDI data document from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `{ "fdi_inflows": [row, ...], "fdi_outflows": [row, ...] }`
/// * `.csv`  – one row per area with a leading `dataset` column
pub fn load_file(path: &Path, years: YearRange) -> Result<FdiDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path, years),
        "csv" => load_csv(path, years),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} areas from {} ({}–{})",
        dataset.len(),
        path.display(),
        years.start,
        years.end
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema, one array of table rows per corpus:
///
/// ```json
/// {
///   "fdi_inflows": [
///     { "Region/economy": "World", "level": "0", "type": "region",
///       "1990": "204886.4", "1991": "154084.6", ... },
///     ...
///   ],
///   "fdi_outflows": [ ... ]
/// }
/// ```
fn load_json(path: &Path, years: YearRange) -> Result<FdiDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    load_json_str(&text, years)
}

/// Parse a data document already held in memory.
pub fn load_json_str(text: &str, years: YearRange) -> Result<FdiDataset> {
    let root: BTreeMap<String, JsonValue> =
        serde_json::from_str(text).context("Expected top-level JSON object")?;

    let mut rows_by_type = BTreeMap::new();
    for (key, value) in root {
        let Some(dataset_type) = DatasetType::from_key(&key) else {
            log::warn!("Ignoring unknown dataset key {key:?}");
            continue;
        };
        let rows: Vec<RawAreaRow> = serde_json::from_value(value)
            .with_context(|| format!("'{key}' is not an array of row objects"))?;
        rows_by_type.insert(dataset_type, rows);
    }

    build_dataset(rows_by_type, years)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.
/// `dataset` holds the corpus key (`fdi_inflows` / `fdi_outflows`),
/// `Region/economy`, `level` and `type` describe the area, and every other
/// column is kept as a year column.
fn load_csv(path: &Path, years: YearRange) -> Result<FdiDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    load_csv_reader(file, years)
}

pub fn load_csv_reader<R: Read>(reader: R, years: YearRange) -> Result<FdiDataset> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let dataset_idx = headers
        .iter()
        .position(|h| h == "dataset")
        .context("CSV missing 'dataset' column")?;

    let mut rows_by_type: BTreeMap<DatasetType, Vec<RawAreaRow>> = BTreeMap::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let key = record.get(dataset_idx).unwrap_or("").trim();
        let dataset_type = DatasetType::from_key(key)
            .with_context(|| format!("CSV row {row_no}: unknown dataset {key:?}"))?;

        let mut raw = RawAreaRow::default();
        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == dataset_idx {
                continue;
            }
            let Some(col_name) = headers.get(col_idx) else {
                continue;
            };
            match col_name.as_str() {
                "Region/economy" => raw.name = Some(value.to_string()),
                "level" => raw.level = Some(JsonValue::String(value.to_string())),
                "type" => raw.kind = Some(value.to_string()),
                _ => {
                    raw.columns
                        .insert(col_name.clone(), JsonValue::String(value.to_string()));
                }
            }
        }

        rows_by_type.entry(dataset_type).or_default().push(raw);
    }

    build_dataset(rows_by_type, years)
}

// ---------------------------------------------------------------------------
// Shared: validate every corpus and resolve its hierarchy
// ---------------------------------------------------------------------------

fn build_dataset(
    rows_by_type: BTreeMap<DatasetType, Vec<RawAreaRow>>,
    years: YearRange,
) -> Result<FdiDataset> {
    if rows_by_type.is_empty() {
        bail!("Document contains neither 'fdi_inflows' nor 'fdi_outflows'");
    }

    let mut dataset = FdiDataset::new(years);
    for dataset_type in DatasetType::ALL {
        let Some(rows) = rows_by_type.get(&dataset_type) else {
            log::warn!("Document has no '{dataset_type}' corpus");
            continue;
        };

        let records = rows
            .iter()
            .enumerate()
            .map(|(i, raw)| validate_row(i, raw, &years))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("validating '{dataset_type}'"))?;

        let absent = records
            .iter()
            .flat_map(|r| &r.series)
            .filter(|v| v.is_nan())
            .count();
        log::debug!(
            "'{dataset_type}': {} areas, {absent} absent yearly values",
            records.len()
        );

        dataset.insert(dataset_type, build_hierarchy(records));
    }

    Ok(dataset)
}
