use std::collections::BTreeSet;

use super::model::SurveyDataset;

// ---------------------------------------------------------------------------
// Selection: which dimension values are accepted, and which indicator to show
// ---------------------------------------------------------------------------

/// The transient per-interaction selection. Rebuilt when a dataset is loaded
/// and mutated in place by the filter widgets.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub regions: BTreeSet<String>,
    pub surveys: BTreeSet<String>,
    pub areas: BTreeSet<String>,
    /// The indicator column to display.
    pub indicator: String,
}

impl Selection {
    /// Initial selection matching the tool's opening view: the national
    /// aggregate row, every survey round, the "Total" stratum, and the first
    /// indicator column.
    pub fn defaults(dataset: &SurveyDataset) -> Self {
        let regions = if dataset.regions.iter().any(|r| r == "India") {
            BTreeSet::from(["India".to_string()])
        } else {
            dataset.regions.first().cloned().into_iter().collect()
        };
        let areas = if dataset.areas.iter().any(|a| a == "Total") {
            BTreeSet::from(["Total".to_string()])
        } else {
            dataset.areas.iter().cloned().collect()
        };

        Selection {
            regions,
            surveys: dataset.surveys.iter().cloned().collect(),
            areas,
            indicator: dataset.indicators.first().cloned().unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Return indices of records accepted by the current selection.
///
/// A record passes iff its region, survey round, and area are each members of
/// the corresponding selection set. An empty set matches nothing (plain set
/// membership, deliberately not a wildcard: unticking every value in a filter
/// hides all rows).
pub fn filtered_indices(dataset: &SurveyDataset, selection: &Selection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.regions.contains(&rec.region)
                && selection.surveys.contains(&rec.survey)
                && selection.areas.contains(&rec.area)
        })
        .map(|(i, _)| i)
        .collect()
}
