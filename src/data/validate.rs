use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{AreaKind, AreaRecord, YearRange};

// ---------------------------------------------------------------------------
// Raw row as found in the data document
// ---------------------------------------------------------------------------

/// One unvalidated table row. Year columns (`"1990"`, `"1991"`, ...) and any
/// other keys land in `columns`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAreaRow {
    #[serde(rename = "Region/economy", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<JsonValue>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub columns: BTreeMap<String, JsonValue>,
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("row {row}: missing area name")]
    MissingName { row: usize },

    #[error("row {row} ({name}): missing level")]
    MissingLevel { row: usize, name: String },

    #[error("row {row} ({name}): level {value} is not a non-negative integer")]
    InvalidLevel {
        row: usize,
        name: String,
        value: String,
    },

    #[error("row {row} ({name}): missing area type")]
    MissingKind { row: usize, name: String },

    #[error("row {row} ({name}): unknown area type {value:?}")]
    UnknownKind {
        row: usize,
        name: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Row → AreaRecord
// ---------------------------------------------------------------------------

/// Validate one raw row and extract its yearly series.
pub fn validate_row(
    row: usize,
    raw: &RawAreaRow,
    years: &YearRange,
) -> Result<AreaRecord, ValidationError> {
    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(ValidationError::MissingName { row })?
        .to_string();

    let level_value = match &raw.level {
        None => return Err(ValidationError::MissingLevel { row, name }),
        Some(JsonValue::String(s)) if s.trim().is_empty() => {
            return Err(ValidationError::MissingLevel { row, name })
        }
        Some(v) => v,
    };
    let raw_level = parse_level(level_value).ok_or_else(|| ValidationError::InvalidLevel {
        row,
        name: name.clone(),
        value: level_value.to_string(),
    })?;

    let kind = match raw.kind.as_deref().map(str::trim) {
        None | Some("") => return Err(ValidationError::MissingKind { row, name }),
        Some(k) => parse_kind(k).ok_or_else(|| ValidationError::UnknownKind {
            row,
            name: name.clone(),
            value: k.to_string(),
        })?,
    };

    let series = years
        .years()
        .map(|year| {
            raw.columns
                .get(&year.to_string())
                .map(parse_year_value)
                .unwrap_or(f64::NAN)
        })
        .collect();

    Ok(AreaRecord {
        name,
        raw_level,
        kind,
        series,
    })
}

/// Accept an integer level given as a JSON number or a decimal string.
pub fn parse_level(value: &JsonValue) -> Option<u32> {
    match value {
        JsonValue::Number(n) => {
            if let Some(i) = n.as_u64() {
                return u32::try_from(i).ok();
            }
            let f = n.as_f64()?;
            if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
                Some(f as u32)
            } else {
                None
            }
        }
        JsonValue::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

pub fn parse_kind(value: &str) -> Option<AreaKind> {
    if value.eq_ignore_ascii_case("region") {
        Some(AreaKind::Region)
    } else if value.eq_ignore_ascii_case("country") {
        Some(AreaKind::Country)
    } else {
        None
    }
}

/// Numbers and numeric strings yield their value; blanks, placeholders and
/// anything unparseable yield NaN (absent).
pub fn parse_year_value(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        JsonValue::String(s) => {
            let s = s.trim();
            match s.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    if !s.is_empty() && s != "-" && s != ".." {
                        log::debug!("unparseable year value {s:?} treated as absent");
                    }
                    f64::NAN
                }
            }
        }
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: JsonValue) -> RawAreaRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn level_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_level(&json!(2)), Some(2));
        assert_eq!(parse_level(&json!(" 3 ")), Some(3));
        assert_eq!(parse_level(&json!(1.0)), Some(1));
        assert_eq!(parse_level(&json!(-1)), None);
        assert_eq!(parse_level(&json!("1.5")), None);
        assert_eq!(parse_level(&json!(2.5)), None);
        assert_eq!(parse_level(&json!("two")), None);
        assert_eq!(parse_level(&json!(true)), None);
    }

    #[test]
    fn year_values() {
        assert_eq!(parse_year_value(&json!(12.5)), 12.5);
        assert_eq!(parse_year_value(&json!("-340.2")), -340.2);
        assert!(parse_year_value(&json!("")).is_nan());
        assert!(parse_year_value(&json!("..")).is_nan());
        assert!(parse_year_value(&json!(null)).is_nan());
    }

    #[test]
    fn valid_row_extracts_series_for_year_range() {
        let raw = row(json!({
            "Region/economy": "Nigeria",
            "level": "2",
            "type": "country",
            "1990": "587.9",
            "1991": -12,
            "1993": "",
            "note": "ignored"
        }));
        let rec = validate_row(4, &raw, &YearRange::new(1990, 1993)).unwrap();
        assert_eq!(rec.name, "Nigeria");
        assert_eq!(rec.raw_level, 2);
        assert_eq!(rec.kind, AreaKind::Country);
        assert_eq!(rec.series.len(), 4);
        assert_eq!(rec.series[0], 587.9);
        assert_eq!(rec.series[1], -12.0);
        assert!(rec.series[2].is_nan());
        assert!(rec.series[3].is_nan());
    }

    #[test]
    fn rejects_malformed_levels() {
        let years = YearRange::default();

        let missing = row(json!({ "Region/economy": "World", "type": "region" }));
        assert_eq!(
            validate_row(0, &missing, &years),
            Err(ValidationError::MissingLevel {
                row: 0,
                name: "World".into()
            })
        );

        let negative = row(json!({ "Region/economy": "World", "level": -1, "type": "region" }));
        assert!(matches!(
            validate_row(1, &negative, &years),
            Err(ValidationError::InvalidLevel { row: 1, .. })
        ));

        let text = row(json!({ "Region/economy": "World", "level": "top", "type": "region" }));
        let err = validate_row(2, &text, &years).unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 2 (World): level \"top\" is not a non-negative integer"
        );
    }

    #[test]
    fn rejects_missing_name_and_unknown_kind() {
        let years = YearRange::default();

        let nameless = row(json!({ "Region/economy": "  ", "level": 0, "type": "region" }));
        assert_eq!(
            validate_row(7, &nameless, &years),
            Err(ValidationError::MissingName { row: 7 })
        );

        let odd = row(json!({ "Region/economy": "Mars", "level": 1, "type": "planet" }));
        assert!(matches!(
            validate_row(8, &odd, &years),
            Err(ValidationError::UnknownKind { .. })
        ));
    }
}
