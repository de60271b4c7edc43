use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::loader::{AREA_COLUMN, REGION_COLUMN, SURVEY_COLUMN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered raw-data table (bottom panel)
// ---------------------------------------------------------------------------

/// Tabular view of the rows passing the current filters: the three dimension
/// columns first, then every indicator column in dataset order.
pub fn raw_data_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    if state.visible_rows.is_empty() {
        ui.label("No rows match the current filters.");
        return;
    }

    let n_cols = 3 + dataset.indicators.len();

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(80.0), n_cols)
            .header(20.0, |mut header| {
                for title in [REGION_COLUMN, SURVEY_COLUMN, AREA_COLUMN] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
                for ind in &dataset.indicators {
                    header.col(|ui| {
                        ui.strong(ind);
                    });
                }
            })
            .body(|body| {
                let rows = &state.visible_rows;
                body.rows(18.0, rows.len(), |mut row| {
                    let rec = &dataset.records[rows[row.index()]];
                    row.col(|ui| {
                        ui.label(&rec.region);
                    });
                    row.col(|ui| {
                        ui.label(&rec.survey);
                    });
                    row.col(|ui| {
                        ui.label(&rec.area);
                    });
                    for value in &rec.values {
                        row.col(|ui| {
                            ui.label(value.to_string());
                        });
                    }
                });
            });
    });
}
