use eframe::NativeOptions;
use std::path::PathBuf;
use stocksignal::config::{ConfigManager, DEFAULT_CONFIG_FILE};
use stocksignal::ui::StockSignalApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = ConfigManager::load(&config_path)?.get().clone();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("StockSignal - Technical Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "StockSignal",
        native_options,
        Box::new(move |cc| Ok(Box::new(StockSignalApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Dashboard failed: {}", e))
}
