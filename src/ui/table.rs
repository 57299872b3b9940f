use eframe::egui::{self, Label, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

/// Render the filtered medicines. Clicking a name selects it for the preview.
pub fn medicine_table(ui: &mut Ui, state: &mut AppState) {
    let Some(ds) = &state.dataset else {
        return;
    };
    let records = &ds.records;
    let indices = &state.visible_indices;
    let selected = state.selected_medicine.as_deref();
    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .max_scroll_height(320.0)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(220.0).at_least(80.0).clip(true))
        .column(Column::initial(180.0).at_least(80.0).clip(true))
        .column(Column::remainder().at_least(120.0).clip(true))
        .columns(Column::auto(), 3)
        .header(ROW_HEIGHT, |mut header| {
            for title in [
                "Medicine Name",
                "Manufacturer",
                "Uses",
                "Excellent Review %",
                "Average Review %",
                "Poor Review %",
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, indices.len(), |mut row| {
                let m = &records[indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    if ui
                        .selectable_label(selected == Some(m.name.as_str()), &m.name)
                        .clicked()
                    {
                        clicked = Some(m.name.clone());
                    }
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&m.manufacturer);
                });
                row.col(|ui: &mut Ui| {
                    ui.add(Label::new(&m.uses).truncate());
                });
                for value in [m.excellent_pct, m.average_pct, m.poor_pct] {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{value:.0}"));
                    });
                }
            });
        });

    if clicked.is_some() {
        state.selected_medicine = clicked;
    }
}
