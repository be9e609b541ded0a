mod app;
mod color;
mod config;
mod data;
mod report;
mod state;
mod ui;

use std::path::Path;

use app::DigIndexApp;
use config::{AppConfig, CONFIG_FILE};
use data::loader::load_dataset;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE));

    // The dataset is loaded and enriched exactly once per session.
    let state = AppState::from_load(load_dataset(&config.data_path));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Digitalization Index Explorer",
        options,
        Box::new(move |cc| {
            ui::fonts::install_cjk_font(&cc.egui_ctx, config.font_path.as_deref());
            Ok(Box::new(DigIndexApp::new(state)))
        }),
    )
}
