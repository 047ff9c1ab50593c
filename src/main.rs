mod app;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use std::path::PathBuf;

use app::MouseMetricsApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Optional dataset path as the first argument.
    let source: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    eframe::run_native(
        "Mouse Metrics – Price Dashboard",
        options,
        Box::new(move |_cc| {
            let app = match &source {
                Some(path) => MouseMetricsApp::with_source(path),
                None => MouseMetricsApp::default(),
            };
            Ok(Box::new(app))
        }),
    )
}
