use std::path::Path;
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{IndicatorValue, SurveyDataset, SurveyRecord};

// ---------------------------------------------------------------------------
// Fixed schema
// ---------------------------------------------------------------------------

/// Header of the region dimension column, as in the NFHS export.
pub const REGION_COLUMN: &str = "India/States/UTs";
/// Header of the survey-round dimension column.
pub const SURVEY_COLUMN: &str = "Survey";
/// Header of the area (stratum) dimension column.
pub const AREA_COLUMN: &str = "Area";

/// The dataset read at startup, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "All India National Family Health Survey.csv";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

static DEFAULT_DATASET: OnceLock<Result<SurveyDataset, DataError>> = OnceLock::new();

/// Load [`DEFAULT_DATASET_PATH`], memoized for the process lifetime.
///
/// The source is treated as static while the tool runs: repeated calls return
/// the same in-memory instance without touching storage again, and there is
/// no invalidation.
pub fn load_default() -> Result<&'static SurveyDataset, DataError> {
    DEFAULT_DATASET
        .get_or_init(|| load_file(Path::new(DEFAULT_DATASET_PATH)))
        .as_ref()
        .map_err(|e| e.clone())
}

/// Load a survey dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the three dimension columns plus indicators
/// * `.json` – records-oriented array (`df.to_json(orient='records')`)
///
/// Any failure here (missing file, unknown extension, malformed rows, absent
/// dimension column) is [`DataError::Unavailable`].
pub fn load_file(path: &Path) -> Result<SurveyDataset, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(anyhow::anyhow!("unsupported file extension: .{other}")),
    };
    parsed.map_err(|e| DataError::Unavailable(format!("{e:#}")))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the three dimension columns and N indicator
/// columns; one record per (region, round, area) combination. Indicator order
/// follows the header.
fn load_csv(path: &Path) -> Result<SurveyDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let dim_idx = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let region_idx = dim_idx(REGION_COLUMN)?;
    let survey_idx = dim_idx(SURVEY_COLUMN)?;
    let area_idx = dim_idx(AREA_COLUMN)?;

    // Indicator columns keep the header's order.
    let indicator_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != region_idx && *i != survey_idx && *i != area_idx)
        .map(|(i, h)| (i, h.clone()))
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let dim = |idx: usize, name: &str| -> Result<String> {
            Ok(record
                .get(idx)
                .with_context(|| format!("CSV row {row_no}: missing '{name}' value"))?
                .trim()
                .to_string())
        };

        let values = indicator_cols
            .iter()
            .map(|(idx, _)| IndicatorValue::from_cell(record.get(*idx).unwrap_or("")))
            .collect();

        records.push(SurveyRecord {
            region: dim(region_idx, REGION_COLUMN)?,
            survey: dim(survey_idx, SURVEY_COLUMN)?,
            area: dim(area_idx, AREA_COLUMN)?,
            values,
        });
    }

    let indicators = indicator_cols.into_iter().map(|(_, h)| h).collect();
    Ok(SurveyDataset::from_records(indicators, records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "India/States/UTs": "India",
///     "Survey": "NFHS-5",
///     "Area": "Total",
///     "Female literacy rate (%)": 71.5
///   },
///   ...
/// ]
/// ```
///
/// The first record fixes the column schema; later records may omit columns
/// (read as missing) but must not introduce new ones.
fn load_json(path: &Path) -> Result<SurveyDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("expected top-level JSON array")?;
    if rows.is_empty() {
        return Ok(SurveyDataset::from_records(Vec::new(), Vec::new()));
    }

    let first = rows[0]
        .as_object()
        .context("row 0 is not a JSON object")?;
    let indicators: Vec<String> = first
        .keys()
        .filter(|k| *k != REGION_COLUMN && *k != SURVEY_COLUMN && *k != AREA_COLUMN)
        .cloned()
        .collect();

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("row {i} is not a JSON object"))?;

        for key in obj.keys() {
            let known = key == REGION_COLUMN
                || key == SURVEY_COLUMN
                || key == AREA_COLUMN
                || indicators.iter().any(|ind| ind == key);
            if !known {
                bail!("row {i}: column '{key}' not present in row 0");
            }
        }

        let dim = |name: &str| -> Result<String> {
            obj.get(name)
                .and_then(|v| v.as_str())
                .map(|s| s.trim().to_string())
                .with_context(|| format!("row {i}: missing or non-string '{name}'"))
        };

        let values = indicators
            .iter()
            .map(|ind| json_to_value(obj.get(ind)))
            .collect();

        records.push(SurveyRecord {
            region: dim(REGION_COLUMN)?,
            survey: dim(SURVEY_COLUMN)?,
            area: dim(AREA_COLUMN)?,
            values,
        });
    }

    Ok(SurveyDataset::from_records(indicators, records))
}

fn json_to_value(val: Option<&JsonValue>) -> IndicatorValue {
    match val {
        None | Some(JsonValue::Null) => IndicatorValue::Missing,
        Some(JsonValue::Number(n)) => match n.as_f64() {
            Some(f) => IndicatorValue::Number(f),
            None => IndicatorValue::Text(n.to_string()),
        },
        Some(JsonValue::String(s)) => IndicatorValue::from_cell(s),
        Some(other) => IndicatorValue::Text(other.to_string()),
    }
}
