use crate::config::{AppConfig, ProviderKind};
use crate::types::RequestResult;
use std::path::PathBuf;

/// Where the next request reads its prices from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Yahoo,
    CsvFile,
}

/// Central application state for the UI
pub struct AppState {
    pub config: AppConfig,

    // Request form
    pub symbol_input: String,
    pub lookback_days: u32,
    pub data_source: DataSource,
    pub csv_path: Option<PathBuf>,

    // Execution State
    pub is_running: bool,
    pub running_symbol: String,
    pub status_message: String,

    // Results
    pub result: Option<RequestResult>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let data_source = match config.provider.kind {
            ProviderKind::Yahoo => DataSource::Yahoo,
            ProviderKind::Csv => DataSource::CsvFile,
        };

        Self {
            symbol_input: config.analysis.default_symbol.clone(),
            lookback_days: config.analysis.clamp_lookback(config.analysis.default_lookback_days),
            data_source,
            csv_path: config.provider.csv_path.clone(),
            is_running: false,
            running_symbol: String::new(),
            status_message: "Ready".to_string(),
            result: None,
            config,
        }
    }

    /// CSV file to read from, when that source is selected
    pub fn csv_override(&self) -> Option<&PathBuf> {
        match self.data_source {
            DataSource::CsvFile => self.csv_path.as_ref(),
            DataSource::Yahoo => None,
        }
    }
}
