use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::RegionColors;
use crate::data::model::IndicatorValue;
use crate::data::present::{choose_presentation, PresentationPlan, RegionSeries};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: indicator picker + metric / chart
// ---------------------------------------------------------------------------

/// Render the indicator picker and whatever the presentation plan calls for.
pub fn presentation_panel(ui: &mut Ui, state: &mut AppState) {
    let indicators: Vec<String> = match &state.dataset {
        Some(ds) => ds.indicators.clone(),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a survey dataset  (File → Open…)");
            });
            return;
        }
    };

    // ---- Indicator picker ----
    let current = state.selection.indicator.clone();
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Indicator");
        egui::ComboBox::from_id_salt("indicator_picker")
            .selected_text(&current)
            .width(360.0)
            .show_ui(ui, |ui: &mut Ui| {
                for ind in &indicators {
                    if ui.selectable_label(current == *ind, ind).clicked() {
                        state.set_indicator(ind);
                    }
                }
            });
    });
    ui.separator();

    // Re-borrow after the picker may have mutated the selection.
    let Some(dataset) = &state.dataset else {
        return;
    };

    match choose_presentation(dataset, &state.visible_rows, &state.selection) {
        Ok(PresentationPlan::SingleMetric { indicator, value }) => {
            single_metric(ui, &indicator, &value);
        }
        Ok(PresentationPlan::ComparisonChart {
            indicator,
            surveys,
            series,
        }) => {
            comparison_chart(ui, &state.region_colors, &indicator, surveys, &series);
        }
        Ok(PresentationPlan::TrendChart { indicator, points }) => {
            trend_chart(ui, &indicator, &points);
        }
        Err(e) => {
            // Fixed schema makes this unreachable from the widgets; log and
            // show rather than tearing the session down.
            log::error!("presentation plan failed: {e}");
            ui.label(RichText::new(format!("Error: {e}")).color(Color32::RED));
        }
    }
}

// ---------------------------------------------------------------------------
// Single-value metric
// ---------------------------------------------------------------------------

fn single_metric(ui: &mut Ui, indicator: &str, value: &IndicatorValue) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(indicator).size(18.0));
        ui.add_space(8.0);
        ui.label(RichText::new(value.to_string()).size(56.0).strong());
    });
}

// ---------------------------------------------------------------------------
// Grouped comparison bars
// ---------------------------------------------------------------------------

/// One group per survey round at integer multiples of `stride`, one bar per
/// region inside the group. Gaps (regions without a value for a round) simply
/// omit the bar.
fn comparison_chart(
    ui: &mut Ui,
    colors: &RegionColors,
    indicator: &str,
    surveys: Vec<String>,
    series: &[RegionSeries],
) {
    let n_regions = series.len().max(1);
    let stride = (n_regions + 1) as f64;
    let half = (n_regions as f64 - 1.0) / 2.0;

    let mut charts = Vec::with_capacity(series.len());
    for (r, s) in series.iter().enumerate() {
        let bars: Vec<Bar> = s
            .values
            .iter()
            .enumerate()
            .filter_map(|(g, v)| {
                v.map(|v| {
                    Bar::new(g as f64 * stride + (r as f64 - half), v)
                        .width(0.9)
                        .name(format!("{} – {}", s.region, surveys[g]))
                })
            })
            .collect();

        charts.push(
            BarChart::new(bars)
                .name(&s.region)
                .color(colors.color_for(&s.region)),
        );
    }

    let labels = surveys;
    Plot::new("comparison_chart")
        .legend(Legend::default())
        .x_axis_label("Survey round")
        .y_axis_label(indicator)
        .x_axis_formatter(move |mark, _range| {
            survey_label(&labels, mark.value, stride)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Trend line over survey rounds
// ---------------------------------------------------------------------------

fn trend_chart(ui: &mut Ui, indicator: &str, points: &[(String, Option<f64>)]) {
    // Rounds sit at x = 0, 1, 2, …; rounds without a value leave a hole.
    let xy: Vec<[f64; 2]> = points
        .iter()
        .enumerate()
        .filter_map(|(i, (_, v))| v.map(|v| [i as f64, v]))
        .collect();

    let labels: Vec<String> = points.iter().map(|(s, _)| s.clone()).collect();

    Plot::new("trend_chart")
        .legend(Legend::default())
        .x_axis_label("Survey round")
        .y_axis_label(indicator)
        .x_axis_formatter(move |mark, _range| survey_label(&labels, mark.value, 1.0))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line_points: PlotPoints = xy.clone().into();
            plot_ui.line(
                Line::new(line_points)
                    .name(indicator)
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0),
            );
            // Markers on every round, px.line(markers=True) style.
            let marker_points: PlotPoints = xy.into();
            plot_ui.points(
                Points::new(marker_points)
                    .color(Color32::LIGHT_BLUE)
                    .radius(4.0),
            );
        });
}

/// Map an axis position back to a survey-round label. Labels live at integer
/// multiples of `stride`; anything else stays blank.
fn survey_label(labels: &[String], value: f64, stride: f64) -> String {
    let idx = (value / stride).round();
    if idx < 0.0 || (value - idx * stride).abs() > 1e-6 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}
