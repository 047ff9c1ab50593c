use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MouseMetricsApp {
    pub state: AppState,
}

impl MouseMetricsApp {
    /// Start with an already-loaded dataset (e.g. a path given on the
    /// command line).
    pub fn with_source(path: &std::path::Path) -> Self {
        let mut state = AppState::default();
        state.load_dataset(path);
        Self { state }
    }
}

impl Default for MouseMetricsApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for MouseMetricsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and view tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: brand filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            views::central_view(ui, &mut self.state);
        });
    }
}
