use std::collections::BTreeSet;

use crate::color::RegionColors;
use crate::data::filter::{filtered_indices, Selection};
use crate::data::model::SurveyDataset;

// ---------------------------------------------------------------------------
// Dimension – the three fixed filterable columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Region,
    Survey,
    Area,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Region, Dimension::Survey, Dimension::Area];

    /// Widget label.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Region => "State/UT",
            Dimension::Survey => "Survey round",
            Dimension::Area => "Area",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<SurveyDataset>,

    /// Current dimension selections and chosen indicator.
    pub selection: Selection,

    /// Indices of rows passing the current selection (cached).
    pub visible_rows: Vec<usize>,

    /// Stable per-region colours for chart series.
    pub region_colors: RegionColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the raw-data section is expanded.
    pub show_raw_data: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: Selection::default(),
            visible_rows: Vec::new(),
            region_colors: RegionColors::default(),
            status_message: None,
            show_raw_data: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset the selection to its defaults
    /// (national aggregate, all rounds, "Total" stratum, first indicator) and
    /// recompute the filtered rows.
    pub fn set_dataset(&mut self, dataset: SurveyDataset) {
        self.selection = Selection::defaults(&dataset);
        self.region_colors = RegionColors::new(&dataset.regions);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_rows` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_rows = filtered_indices(ds, &self.selection);
        } else {
            self.visible_rows.clear();
        }
    }

    /// The dataset's value list for a dimension (the filter widget options).
    pub fn dimension_values(&self, dim: Dimension) -> &[String] {
        match &self.dataset {
            Some(ds) => match dim {
                Dimension::Region => &ds.regions,
                Dimension::Survey => &ds.surveys,
                Dimension::Area => &ds.areas,
            },
            None => &[],
        }
    }

    /// Mutable handle on one dimension's selected set.
    pub fn selected_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::Region => &mut self.selection.regions,
            Dimension::Survey => &mut self.selection.surveys,
            Dimension::Area => &mut self.selection.areas,
        }
    }

    /// Read-only view of one dimension's selected set.
    pub fn selected(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::Region => &self.selection.regions,
            Dimension::Survey => &self.selection.surveys,
            Dimension::Area => &self.selection.areas,
        }
    }

    /// Toggle a single value in a dimension's filter.
    pub fn toggle_value(&mut self, dim: Dimension, value: &str) {
        let selected = self.selected_mut(dim);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every value of a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        let all: BTreeSet<String> = self.dimension_values(dim).iter().cloned().collect();
        *self.selected_mut(dim) = all;
        self.refilter();
    }

    /// Deselect every value of a dimension. The filter then matches nothing,
    /// mirroring an emptied multi-select.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selected_mut(dim).clear();
        self.refilter();
    }

    /// Switch the displayed indicator. The picker is populated from the
    /// dataset, so an unknown name is a bug; it is logged and ignored.
    pub fn set_indicator(&mut self, name: &str) {
        if let Some(ds) = &self.dataset {
            match ds.choose_indicator(name) {
                Ok(_) => self.selection.indicator = name.to_string(),
                Err(e) => log::error!("indicator picker out of sync: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{IndicatorValue, SurveyRecord};

    fn record(region: &str, survey: &str, area: &str) -> SurveyRecord {
        SurveyRecord {
            region: region.to_string(),
            survey: survey.to_string(),
            area: area.to_string(),
            values: vec![IndicatorValue::Number(1.0), IndicatorValue::Number(2.0)],
        }
    }

    fn loaded_state() -> AppState {
        let ds = SurveyDataset::from_records(
            vec!["Literacy".into(), "Anaemia".into()],
            vec![
                record("India", "NFHS-4", "Total"),
                record("India", "NFHS-5", "Total"),
                record("Kerala", "NFHS-4", "Total"),
            ],
        );
        let mut state = AppState::default();
        state.set_dataset(ds);
        state
    }

    #[test]
    fn set_dataset_applies_defaults_and_filters() {
        let state = loaded_state();
        assert_eq!(state.selection.indicator, "Literacy");
        // Default selection: India, all rounds, Total → two rows.
        assert_eq!(state.visible_rows, vec![0, 1]);
    }

    #[test]
    fn toggling_a_region_refilters() {
        let mut state = loaded_state();
        state.toggle_value(Dimension::Region, "Kerala");
        assert_eq!(state.visible_rows, vec![0, 1, 2]);

        state.toggle_value(Dimension::Region, "India");
        assert_eq!(state.visible_rows, vec![2]);
    }

    #[test]
    fn select_none_hides_everything() {
        let mut state = loaded_state();
        state.select_none(Dimension::Survey);
        assert!(state.visible_rows.is_empty());

        state.select_all(Dimension::Survey);
        assert_eq!(state.visible_rows, vec![0, 1]);
    }

    #[test]
    fn unknown_indicator_is_ignored() {
        let mut state = loaded_state();
        state.set_indicator("Anaemia");
        assert_eq!(state.selection.indicator, "Anaemia");

        state.set_indicator("Not A Column");
        assert_eq!(state.selection.indicator, "Anaemia");
    }
}
