use std::fmt;

use super::error::DataError;

// ---------------------------------------------------------------------------
// IndicatorValue – a single cell in an indicator column
// ---------------------------------------------------------------------------

/// A survey statistic as found in one cell. NFHS exports mix percentages,
/// counts, and the occasional free-text annotation, so cells are typed by
/// parse attempt rather than by a declared schema.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
    Missing,
}

impl IndicatorValue {
    /// Parse a raw cell. Empty → `Missing`, numeric → `Number`, else `Text`.
    pub fn from_cell(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return IndicatorValue::Missing;
        }
        if let Ok(v) = s.parse::<f64>() {
            return IndicatorValue::Number(v);
        }
        IndicatorValue::Text(s.to_string())
    }

    /// Numeric view for charting. Text and missing cells plot as gaps.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IndicatorValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorValue::Number(v) => write!(f, "{v}"),
            IndicatorValue::Text(s) => write!(f, "{s}"),
            IndicatorValue::Missing => write!(f, "–"),
        }
    }
}

// ---------------------------------------------------------------------------
// SurveyRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// One row: the three dimension values plus every indicator cell,
/// in the same order as [`SurveyDataset::indicators`].
#[derive(Debug, Clone)]
pub struct SurveyRecord {
    /// State/UT name, or "India" for the national aggregate.
    pub region: String,
    /// Survey round identifier, e.g. "NFHS-4".
    pub survey: String,
    /// Sub-population stratum: "Total", "Urban", or "Rural".
    pub area: String,
    /// Indicator cells, parallel to the dataset's indicator list.
    pub values: Vec<IndicatorValue>,
}

// ---------------------------------------------------------------------------
// SurveyDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed dimension indices.
/// Read-only after load; every row shares the same indicator columns.
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    /// All rows, in source order.
    pub records: Vec<SurveyRecord>,
    /// Indicator column names in original column order
    /// (all source columns minus the three dimension columns).
    pub indicators: Vec<String>,
    /// Unique regions, sorted ascending.
    pub regions: Vec<String>,
    /// Unique survey rounds, in first-appearance order.
    pub surveys: Vec<String>,
    /// Unique areas, in first-appearance order.
    pub areas: Vec<String>,
}

impl SurveyDataset {
    /// Build the dimension indices from parsed records.
    pub fn from_records(indicators: Vec<String>, records: Vec<SurveyRecord>) -> Self {
        let mut regions: Vec<String> = Vec::new();
        let mut surveys: Vec<String> = Vec::new();
        let mut areas: Vec<String> = Vec::new();

        for rec in &records {
            push_unique(&mut regions, &rec.region);
            push_unique(&mut surveys, &rec.survey);
            push_unique(&mut areas, &rec.area);
        }
        // Regions are listed alphabetically in the UI; survey rounds and
        // areas keep the file's order (rounds are chronological there).
        regions.sort();

        SurveyDataset {
            records,
            indicators,
            regions,
            surveys,
            areas,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of an indicator in the column order, if present.
    pub fn indicator_index(&self, name: &str) -> Option<usize> {
        self.indicators.iter().position(|i| i == name)
    }

    /// Validate a user-chosen indicator against the available list.
    ///
    /// The picker widget is populated from `indicators`, so a miss here is a
    /// programming error, not a user error.
    pub fn choose_indicator(&self, name: &str) -> Result<usize, DataError> {
        self.indicator_index(name)
            .ok_or_else(|| DataError::UnknownIndicator(name.to_string()))
    }

    /// Cell value for a row/indicator pair.
    pub fn value(&self, row: usize, indicator_idx: usize) -> &IndicatorValue {
        &self.records[row].values[indicator_idx]
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, survey: &str, area: &str, values: &[f64]) -> SurveyRecord {
        SurveyRecord {
            region: region.to_string(),
            survey: survey.to_string(),
            area: area.to_string(),
            values: values.iter().map(|&v| IndicatorValue::Number(v)).collect(),
        }
    }

    fn sample() -> SurveyDataset {
        SurveyDataset::from_records(
            vec!["Literacy".into(), "Anaemia".into()],
            vec![
                record("Kerala", "NFHS-4", "Total", &[92.0, 34.0]),
                record("India", "NFHS-4", "Total", &[68.4, 53.0]),
                record("India", "NFHS-5", "Total", &[71.5, 57.0]),
            ],
        )
    }

    #[test]
    fn dimension_indices_ordering() {
        let ds = sample();
        // Regions sorted, rounds and areas in first-appearance order.
        assert_eq!(ds.regions, vec!["India", "Kerala"]);
        assert_eq!(ds.surveys, vec!["NFHS-4", "NFHS-5"]);
        assert_eq!(ds.areas, vec!["Total"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn indicator_list_preserves_column_order() {
        let ds = sample();
        assert_eq!(ds.indicators, vec!["Literacy", "Anaemia"]);
        assert_eq!(ds.indicator_index("Anaemia"), Some(1));
        assert_eq!(ds.choose_indicator("Literacy").unwrap(), 0);
    }

    #[test]
    fn choose_indicator_rejects_unknown_name() {
        let ds = sample();
        let err = ds.choose_indicator("Survey").unwrap_err();
        assert!(matches!(err, DataError::UnknownIndicator(name) if name == "Survey"));
    }

    #[test]
    fn cell_typing_by_parse_attempt() {
        assert_eq!(IndicatorValue::from_cell("55.2"), IndicatorValue::Number(55.2));
        assert_eq!(IndicatorValue::from_cell(" 7 "), IndicatorValue::Number(7.0));
        assert_eq!(
            IndicatorValue::from_cell("NA"),
            IndicatorValue::Text("NA".into())
        );
        assert_eq!(IndicatorValue::from_cell(""), IndicatorValue::Missing);
        assert_eq!(IndicatorValue::from_cell("NA").as_f64(), None);
        assert_eq!(IndicatorValue::from_cell("55.2").as_f64(), Some(55.2));
    }
}
