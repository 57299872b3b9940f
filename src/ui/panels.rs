use std::path::Path;

use eframe::egui::{self, Color32, RichText, Slider, TextEdit, Ui};

use crate::auth::SessionGuard;
use crate::data::filter::ManufacturerFilter;
use crate::state::AppState;
use crate::ui::login;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // ---- Name search ----
    ui.strong("Search Medicine Name");
    ui.add(
        TextEdit::singleline(&mut state.filters.name_substring)
            .hint_text("e.g. paracetamol")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    // ---- Manufacturer ----
    ui.strong("Select Manufacturer");
    let selected_text = match &state.filters.manufacturer {
        ManufacturerFilter::All => "All".to_string(),
        ManufacturerFilter::Exact(name) => name.clone(),
    };
    egui::ComboBox::from_id_salt("manufacturer")
        .selected_text(selected_text)
        .width(ui.available_width())
        .height(400.0)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut state.filters.manufacturer, ManufacturerFilter::All, "All");
            for name in &dataset.manufacturers {
                ui.selectable_value(
                    &mut state.filters.manufacturer,
                    ManufacturerFilter::Exact(name.clone()),
                    name,
                );
            }
        });
    ui.add_space(8.0);

    // ---- Threshold ----
    ui.strong("Minimum Excellent Review %");
    ui.add(
        Slider::new(&mut state.filters.min_excellent, 0.0..=100.0)
            .step_by(1.0)
            .suffix("%"),
    );
    ui.add_space(8.0);

    if ui.button("Reset filters").clicked() {
        state.reset_filters();
    }

    // Only recomputes when a widget actually changed the filters.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, guard: &mut SessionGuard) {
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
                "{} medicines loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button("Logout").clicked() {
                guard.logout();
                return;
            }
            login::welcome_label(ui, guard);
        });
    });
}

// ---------------------------------------------------------------------------
// Dataset loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open medicine dataset")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` into the state, reporting failures in the status bar.
pub fn load_into(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} medicines from {} ({} manufacturers)",
                dataset.len(),
                path.display(),
                dataset.manufacturers.len()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
