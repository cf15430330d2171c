use chrono::{Duration, NaiveDate};

use super::provider::MarketDataProvider;
use crate::error::StockSignalError;
use crate::types::OhlcSeries;

/// Result of one provider call.
#[derive(Debug)]
pub enum FetchOutcome {
    /// At least one bar.
    Data(OhlcSeries),
    /// The provider answered but had no rows for the window.
    NoData,
    /// The provider call failed; the error is kept for logging.
    Failed(StockSignalError),
}

impl FetchOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Requests `[today - lookback_days, today)` from `provider`.
pub fn fetch_series(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    lookback_days: u32,
    today: NaiveDate,
) -> FetchOutcome {
    if lookback_days == 0 {
        return FetchOutcome::Failed(StockSignalError::Provider(
            "lookback must be at least one day".to_string(),
        ));
    }

    let start = today - Duration::days(i64::from(lookback_days));
    log::info!(
        "Fetching {} from {} ({} to {})",
        symbol,
        provider.name(),
        start,
        today
    );

    match provider.history(symbol, start, today) {
        Ok(series) if series.is_empty() => {
            log::info!("{} returned no rows for {}", provider.name(), symbol);
            FetchOutcome::NoData
        }
        Ok(series) => {
            log::debug!("{} returned {} rows for {}", provider.name(), series.len(), symbol);
            FetchOutcome::Data(series)
        }
        Err(e) => {
            log::warn!("{} failed for {}: {}", provider.name(), symbol, e);
            FetchOutcome::Failed(e)
        }
    }
}
