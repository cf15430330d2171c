use chrono::NaiveDate;
use std::path::Path;

use super::connectors::{CsvProvider, YahooProvider};
use crate::config::provider::{ProviderConfig, ProviderKind};
use crate::error::{Result, StockSignalError};
use crate::types::OhlcSeries;

/// Source of daily OHLC history.
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Daily bars for `symbol` with `start <= date < end`. An unknown symbol
    /// may come back either as an error or as an empty series.
    fn history(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<OhlcSeries>;
}

/// Builds the provider named by `config`. A `csv_override` path takes
/// precedence over the configured CSV path and forces the CSV provider.
pub fn build_provider(
    config: &ProviderConfig,
    csv_override: Option<&Path>,
) -> Result<Box<dyn MarketDataProvider>> {
    if let Some(path) = csv_override {
        return Ok(Box::new(CsvProvider::new(path)));
    }

    match config.kind {
        ProviderKind::Yahoo => Ok(Box::new(YahooProvider::new(config)?)),
        ProviderKind::Csv => {
            let path = config.csv_path.as_ref().ok_or_else(|| {
                StockSignalError::Configuration(
                    "provider.csv_path is required when provider.kind = \"csv\"".to_string(),
                )
            })?;
            Ok(Box::new(CsvProvider::new(path)))
        }
    }
}
