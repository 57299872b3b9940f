mod app;
mod auth;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::MedicineDashboardApp;
use config::{CONFIG_FILE, DashboardConfig};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Medicine Reviews Dashboard",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and decode preview images.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(MedicineDashboardApp::new(config)))
        }),
    )
}
