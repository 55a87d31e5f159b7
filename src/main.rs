mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::DashboardApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let data_dir = config::data_dir_from_env();
    log::info!("Reading dashboard data from {}", data_dir.display());
    let state = AppState::new(data_dir);
    if let Err(e) = &state.data {
        log::error!("{e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "France – Investor Pitch Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
}
