mod app;
mod color;
mod data;
mod pages;
mod state;
mod ui;

use std::path::Path;

use app::DashboardApp;
use eframe::egui;
use state::AppState;

/// Input table, resolved against the working directory.
const DATASET_PATH: &str = "The_Cancer_data_1500_V2.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let loaded = data::loader::load_csv(Path::new(DATASET_PATH));
    match &loaded {
        Ok(dataset) => log::info!(
            "Loaded {} records with columns {:?}",
            dataset.len(),
            dataset.column_names()
        ),
        Err(e) => log::error!("Failed to load {DATASET_PATH}: {e}"),
    }
    let state = AppState::new(loaded);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 850.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::panels::TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
}
