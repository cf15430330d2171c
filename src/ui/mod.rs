mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::StockSignalApp;
pub use services::{export_frame_csv, AnalysisRunner};
pub use state::{AppState, DataSource};
