use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{chart, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NfhsExplorerApp {
    pub state: AppState,
}

impl NfhsExplorerApp {
    /// Start the session: try the default dataset once. If that fails the UI
    /// comes up empty with the error in the top bar, and File → Open… can
    /// still load a file.
    pub fn new() -> Self {
        let mut state = AppState::default();
        match loader::load_default() {
            Ok(dataset) => {
                log::info!(
                    "Loaded '{}': {} rows, {} indicators",
                    loader::DEFAULT_DATASET_PATH,
                    dataset.len(),
                    dataset.indicators.len()
                );
                state.set_dataset(dataset.clone());
            }
            Err(e) => {
                log::error!("startup load failed: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
        Self { state }
    }
}

impl Default for NfhsExplorerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for NfhsExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: dimension filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered raw data ----
        if self.state.show_raw_data {
            egui::TopBottomPanel::bottom("raw_data")
                .default_height(200.0)
                .resizable(true)
                .show(ctx, |ui| {
                    table::raw_data_table(ui, &self.state);
                });
        }

        // ---- Central panel: metric / chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            chart::presentation_panel(ui, &mut self.state);
        });
    }
}
