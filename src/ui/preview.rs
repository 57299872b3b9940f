use eframe::egui::{self, Image, RichText, Ui, Vec2};

use crate::state::AppState;

const PREVIEW_MAX: Vec2 = Vec2::new(420.0, 320.0);

/// Selector over the visible medicine names plus the chosen record's image.
pub fn image_preview(ui: &mut Ui, state: &mut AppState) {
    let names: Vec<String> = state.visible_names().into_iter().map(str::to_string).collect();
    if names.is_empty() {
        ui.label("No medicines to preview.");
        return;
    }

    let current = state.selected_medicine.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("preview_medicine")
        .selected_text(&current)
        .width(320.0)
        .height(400.0)
        .show_ui(ui, |ui: &mut Ui| {
            for name in &names {
                ui.selectable_value(&mut state.selected_medicine, Some(name.clone()), name);
            }
        });
    ui.add_space(6.0);

    let Some(record) = state.selected_record() else {
        placeholder(ui, "Select a medicine to view its image.");
        return;
    };

    match record.image_ref() {
        Some(uri) => {
            let image = Image::from_uri(uri.to_string())
                .max_size(PREVIEW_MAX)
                .maintain_aspect_ratio(true)
                .show_loading_spinner(true);
            // Failed fetches and undecodable images get the same placeholder.
            if image.load_for_size(ui.ctx(), PREVIEW_MAX).is_err() {
                placeholder(ui, "Image unavailable.");
            } else {
                ui.add(image);
            }
        }
        None => placeholder(ui, "No image for this medicine."),
    }
    ui.label(RichText::new(&record.name).italics());
}

fn placeholder(ui: &mut Ui, text: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_size(Vec2::new(240.0, 160.0));
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.weak(text);
        });
    });
}
