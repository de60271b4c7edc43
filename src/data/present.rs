use super::error::DataError;
use super::filter::Selection;
use super::model::{IndicatorValue, SurveyDataset};

// ---------------------------------------------------------------------------
// PresentationPlan: what the central panel should draw
// ---------------------------------------------------------------------------

/// One region's values across the selected survey rounds, parallel to
/// [`PresentationPlan::ComparisonChart`]'s `surveys` list. `None` marks a gap:
/// either no matching row or a non-numeric cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSeries {
    pub region: String,
    pub values: Vec<Option<f64>>,
}

/// Pure description of the view to render. Carries data only; drawing is the
/// UI layer's job.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationPlan {
    /// Exactly one filtered row: show the indicator as a single big number.
    SingleMetric {
        indicator: String,
        value: IndicatorValue,
    },
    /// More than one region selected: grouped bars, one group per survey
    /// round, one bar per region within the group.
    ComparisonChart {
        indicator: String,
        surveys: Vec<String>,
        series: Vec<RegionSeries>,
    },
    /// One region selected: the indicator over survey rounds as a line.
    TrendChart {
        indicator: String,
        points: Vec<(String, Option<f64>)>,
    },
}

/// Decide between metric, comparison, and trend views.
///
/// The branch depends on the filtered row count and the number of *selected*
/// regions, in that order:
/// * one row → `SingleMetric`, regardless of how many regions are selected;
/// * more than one selected region → `ComparisonChart`. The count comes from
///   the selection, not from the rows that survived filtering, so a selected
///   region with no matching rows still gets a (gap-filled) series;
/// * otherwise → `TrendChart`, rounds in dataset order.
pub fn choose_presentation(
    dataset: &SurveyDataset,
    rows: &[usize],
    selection: &Selection,
) -> Result<PresentationPlan, DataError> {
    let indicator_idx = dataset
        .indicator_index(&selection.indicator)
        .ok_or_else(|| DataError::MissingIndicatorColumn(selection.indicator.clone()))?;

    if rows.len() == 1 {
        return Ok(PresentationPlan::SingleMetric {
            indicator: selection.indicator.clone(),
            value: dataset.value(rows[0], indicator_idx).clone(),
        });
    }

    // Selected rounds in the dataset's (chronological) order.
    let surveys: Vec<String> = dataset
        .surveys
        .iter()
        .filter(|s| selection.surveys.contains(*s))
        .cloned()
        .collect();

    let value_at = |region: &str, survey: &str| -> Option<f64> {
        rows.iter()
            .find(|&&row| {
                let rec = &dataset.records[row];
                rec.region == region && rec.survey == survey
            })
            .and_then(|&row| dataset.value(row, indicator_idx).as_f64())
    };

    if selection.regions.len() > 1 {
        // Series in the dataset's region order, restricted to the selection.
        let series: Vec<RegionSeries> = dataset
            .regions
            .iter()
            .filter(|r| selection.regions.contains(*r))
            .map(|region| RegionSeries {
                region: region.clone(),
                values: surveys.iter().map(|s| value_at(region, s)).collect(),
            })
            .collect();

        return Ok(PresentationPlan::ComparisonChart {
            indicator: selection.indicator.clone(),
            surveys,
            series,
        });
    }

    let region = selection.regions.iter().next().cloned().unwrap_or_default();
    let points: Vec<(String, Option<f64>)> = surveys
        .into_iter()
        .map(|s| {
            let v = value_at(&region, &s);
            (s, v)
        })
        .collect();

    Ok(PresentationPlan::TrendChart {
        indicator: selection.indicator.clone(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filtered_indices;
    use crate::data::model::SurveyRecord;
    use std::collections::BTreeSet;

    fn record(region: &str, survey: &str, area: &str, value: f64) -> SurveyRecord {
        SurveyRecord {
            region: region.to_string(),
            survey: survey.to_string(),
            area: area.to_string(),
            values: vec![IndicatorValue::Number(value)],
        }
    }

    /// India and Kerala across NFHS-4/NFHS-5, Total stratum only.
    fn sample() -> SurveyDataset {
        SurveyDataset::from_records(
            vec!["Literacy".into()],
            vec![
                record("India", "NFHS-4", "Total", 68.4),
                record("India", "NFHS-5", "Total", 71.5),
                record("Kerala", "NFHS-4", "Total", 92.0),
                record("Kerala", "NFHS-5", "Total", 96.2),
            ],
        )
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn selection(regions: &[&str], surveys: &[&str], areas: &[&str]) -> Selection {
        Selection {
            regions: set(regions),
            surveys: set(surveys),
            areas: set(areas),
            indicator: "Literacy".into(),
        }
    }

    #[test]
    fn single_region_multi_row_yields_trend() {
        let ds = sample();
        let sel = selection(&["India"], &["NFHS-4", "NFHS-5"], &["Total"]);
        let rows = filtered_indices(&ds, &sel);
        assert_eq!(rows.len(), 2);

        let plan = choose_presentation(&ds, &rows, &sel).unwrap();
        assert_eq!(
            plan,
            PresentationPlan::TrendChart {
                indicator: "Literacy".into(),
                points: vec![
                    ("NFHS-4".into(), Some(68.4)),
                    ("NFHS-5".into(), Some(71.5)),
                ],
            }
        );
    }

    #[test]
    fn multiple_regions_yield_comparison() {
        let ds = sample();
        let sel = selection(&["India", "Kerala"], &["NFHS-4", "NFHS-5"], &["Total"]);
        let rows = filtered_indices(&ds, &sel);
        assert_eq!(rows.len(), 4);

        let plan = choose_presentation(&ds, &rows, &sel).unwrap();
        assert_eq!(
            plan,
            PresentationPlan::ComparisonChart {
                indicator: "Literacy".into(),
                surveys: vec!["NFHS-4".into(), "NFHS-5".into()],
                series: vec![
                    RegionSeries {
                        region: "India".into(),
                        values: vec![Some(68.4), Some(71.5)],
                    },
                    RegionSeries {
                        region: "Kerala".into(),
                        values: vec![Some(92.0), Some(96.2)],
                    },
                ],
            }
        );
    }

    #[test]
    fn one_filtered_row_yields_single_metric() {
        let ds = sample();
        let sel = selection(&["Kerala"], &["NFHS-5"], &["Total"]);
        let rows = filtered_indices(&ds, &sel);
        assert_eq!(rows.len(), 1);

        let plan = choose_presentation(&ds, &rows, &sel).unwrap();
        assert_eq!(
            plan,
            PresentationPlan::SingleMetric {
                indicator: "Literacy".into(),
                value: IndicatorValue::Number(96.2),
            }
        );
    }

    #[test]
    fn single_metric_wins_even_with_two_regions_selected() {
        let ds = sample();
        // Two regions selected but only one survives filtering to one row.
        let mut sel = selection(&["India", "Goa"], &["NFHS-4"], &["Total"]);
        sel.indicator = "Literacy".into();
        let rows = filtered_indices(&ds, &sel);
        assert_eq!(rows.len(), 1);

        let plan = choose_presentation(&ds, &rows, &sel).unwrap();
        assert!(matches!(plan, PresentationPlan::SingleMetric { .. }));
    }

    #[test]
    fn comparison_branch_uses_selected_region_count_not_filtered() {
        let ds = sample();
        // "Goa" has no rows at all; India contributes two. The selected
        // region count still forces the comparison branch, with gaps for Goa.
        let sel = selection(&["India", "Goa"], &["NFHS-4", "NFHS-5"], &["Total"]);
        let rows = filtered_indices(&ds, &sel);
        assert_eq!(rows.len(), 2);

        let plan = choose_presentation(&ds, &rows, &sel).unwrap();
        match plan {
            PresentationPlan::ComparisonChart { series, .. } => {
                // Goa is not a dataset region, so only India gets a series;
                // dataset order governs the listing.
                assert_eq!(series.len(), 1);
                assert_eq!(series[0].region, "India");
            }
            other => panic!("expected comparison chart, got {other:?}"),
        }
    }

    #[test]
    fn selected_region_without_rows_gets_gaps() {
        let mut ds = sample();
        // Goa exists in the dataset but only for NFHS-5.
        ds = SurveyDataset::from_records(
            ds.indicators.clone(),
            ds.records
                .iter()
                .cloned()
                .chain(std::iter::once(record("Goa", "NFHS-5", "Total", 88.0)))
                .collect(),
        );
        let sel = selection(&["Goa", "India"], &["NFHS-4", "NFHS-5"], &["Total"]);
        let rows = filtered_indices(&ds, &sel);

        let plan = choose_presentation(&ds, &rows, &sel).unwrap();
        match plan {
            PresentationPlan::ComparisonChart { surveys, series, .. } => {
                assert_eq!(surveys, vec!["NFHS-4".to_string(), "NFHS-5".to_string()]);
                let goa = series.iter().find(|s| s.region == "Goa").unwrap();
                assert_eq!(goa.values, vec![None, Some(88.0)]);
            }
            other => panic!("expected comparison chart, got {other:?}"),
        }
    }

    #[test]
    fn missing_indicator_column_is_a_contract_violation() {
        let ds = sample();
        let mut sel = selection(&["India"], &["NFHS-4"], &["Total"]);
        sel.indicator = "Not A Column".into();
        let rows = filtered_indices(&ds, &sel);

        let err = choose_presentation(&ds, &rows, &sel).unwrap_err();
        assert!(matches!(err, DataError::MissingIndicatorColumn(_)));
    }

    #[test]
    fn empty_view_single_region_yields_empty_trend() {
        let ds = sample();
        let sel = selection(&["India"], &[], &["Total"]);
        let rows = filtered_indices(&ds, &sel);
        assert!(rows.is_empty());

        let plan = choose_presentation(&ds, &rows, &sel).unwrap();
        assert_eq!(
            plan,
            PresentationPlan::TrendChart {
                indicator: "Literacy".into(),
                points: vec![],
            }
        );
    }
}
