mod app;
mod ui;

use anyhow::Result;
use app::ExplorerApp;
use eframe::egui;
use fdi_explorer::ExplorerConfig;
use fdi_explorer::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = ExplorerConfig::from_env(std::env::args().skip(1))?;
    log::debug!("Starting with {config:?}");

    let mut state = AppState::new(config);
    if let Some(path) = state.config.data_path.clone() {
        state.open_path(&path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FDI Data Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
