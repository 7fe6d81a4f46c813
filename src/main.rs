use std::path::PathBuf;

use eframe::egui;
use graph_slicer::app::GraphSlicerApp;
use graph_slicer::config::SlicerConfig;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional JSON config as the first argument.
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SlicerConfig::from_file(&path).unwrap_or_else(|e| {
            log::warn!("{e:#}; using defaults");
            SlicerConfig::default()
        }),
        None => SlicerConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GraphSlicer",
        options,
        Box::new(|_cc| Ok(Box::new(GraphSlicerApp::new(config)))),
    )
}
