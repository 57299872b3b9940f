use std::path::PathBuf;

use eframe::egui::{self, ScrollArea, Ui};

use crate::auth::{SessionGuard, StaticCredentials};
use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::login::{self, LoginForm};
use crate::ui::{charts, panels, preview, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MedicineDashboardApp {
    pub guard: SessionGuard,
    pub login: LoginForm,
    pub state: AppState,
    dataset_path: PathBuf,
}

impl MedicineDashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        let verifier = StaticCredentials::new(config.credentials);
        Self {
            guard: SessionGuard::new(Box::new(verifier)),
            login: LoginForm::default(),
            state: AppState::new(config.default_min_excellent, config.top_n),
            dataset_path: config.dataset_path,
        }
    }

    /// The dataset is read only once someone has signed in.
    fn ensure_dataset(&mut self) {
        if self.state.dataset.is_none() && self.state.status_message.is_none() {
            panels::load_into(&mut self.state, &self.dataset_path);
        }
    }
}

impl eframe::App for MedicineDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.guard.is_authenticated() {
            egui::CentralPanel::default().show(ctx, |ui| {
                login::login_panel(ui, &mut self.login, &mut self.guard);
            });
            return;
        }
        self.ensure_dataset();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &mut self.guard);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table, charts, preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &mut self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let Some(ds) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a medicine dataset to begin  (File → Open…)");
        });
        return;
    };
    if ds.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The dataset has no readable medicines  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Medicine Review Analysis Dashboard");
            ui.label(format!(
                "Showing {} medicines after applying filters",
                state.visible_indices.len()
            ));
            ui.add_space(6.0);
            table::medicine_table(ui, state);

            ui.separator();
            ui.heading("Review Distribution");
            charts::review_pie(ui, state.summary.means.as_ref());

            ui.separator();
            ui.heading(format!("Top {} Manufacturers by Number of Medicines", state.top_n));
            charts::manufacturer_bars(ui, &state.summary);

            ui.separator();
            ui.heading(format!("Top {} Medicines by Excellent Review %", state.top_n));
            charts::top_rated_bars(ui, &state.summary);

            ui.separator();
            ui.heading("Medicine Image Preview");
            preview::image_preview(ui, state);
        });
}
