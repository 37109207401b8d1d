mod app;
mod state;
mod ui;

use std::path::PathBuf;

use app::MarksViewerApp;
use eframe::egui;
use marks_viewer::config::AnalysisConfig;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AnalysisConfig::from_env().unwrap_or_else(|e| {
        log::error!("Ignoring invalid analysis config: {e:#}");
        AnalysisConfig::default()
    });

    let mut state = AppState::new(config);
    // Optional file to open on startup.
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        state.load_path(&path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Marks Viewer – CSV Statistics",
        options,
        Box::new(move |_cc| Ok(Box::new(MarksViewerApp::new(state)))),
    )
}
