use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Dimension};

// ---------------------------------------------------------------------------
// Left side panel – dimension filters
// ---------------------------------------------------------------------------

/// Render the left filter panel: one collapsible multi-select per dimension.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for dim in Dimension::ALL {
                dimension_filter(ui, state, dim);
            }
        });
}

fn dimension_filter(ui: &mut Ui, state: &mut AppState, dim: Dimension) {
    // Clone the option list so we can mutate state inside the loop.
    let values: Vec<String> = state.dimension_values(dim).to_vec();

    let n_selected = state.selected(dim).len();
    let header_text = format!("{}  ({n_selected}/{})", dim.label(), values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(dim.label())
        .default_open(dim == Dimension::Region)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(dim);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(dim);
                }
            });

            for val in &values {
                let mut text = RichText::new(val);
                // Region labels carry their chart colour.
                if dim == Dimension::Region {
                    text = text.color(state.region_colors.color_for(val));
                }

                let mut checked = state.selected(dim).contains(val);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_value(dim, val);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} matching",
                ds.len(),
                state.visible_rows.len()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_raw_data, "Raw data")
            .clicked()
        {
            state.show_raw_data = !state.show_raw_data;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open survey data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows, {} indicators, {} regions",
                    dataset.len(),
                    dataset.indicators.len(),
                    dataset.regions.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
