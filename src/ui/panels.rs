use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::BrandFilter;
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Top bar: file menu, tab strip, status
// ---------------------------------------------------------------------------

/// Render the top menu / tab bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                if let Some(path) = state.source.clone() {
                    state.cache.invalidate(&path);
                    state.load_dataset(&path);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        for view in View::ALL {
            if ui
                .selectable_label(state.view == view, view.title())
                .clicked()
            {
                state.view = view;
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} listings loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – brand filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Mouse Metrics");
    ui.label("Price statistics for retail mouse listings");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ui.strong("Filter by brand");
    let brands = dataset.brands.clone();
    let current = state.filter.clone();

    let mut selected: Option<BrandFilter> = None;
    egui::ComboBox::from_id_salt("brand_filter")
        .selected_text(current.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == BrandFilter::All, "All brands")
                .clicked()
            {
                selected = Some(BrandFilter::All);
            }
            for brand in &brands {
                let choice = BrandFilter::Brand(brand.clone());
                if ui.selectable_label(current == choice, brand).clicked() {
                    selected = Some(choice);
                }
            }
        });
    if let Some(filter) = selected {
        state.set_filter(filter);
    }

    if state.view.uses_filter() {
        ui.small("Applies to this view.");
    } else {
        ui.small("This view always shows the full dataset.");
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listing data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_dataset(&path);
    }
}
