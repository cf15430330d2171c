use chrono::NaiveDate;
use polars::prelude::*;

use super::signal::classify_signal;
use super::summary::summarize;
use crate::config::{AppConfig, IndicatorConfig};
use crate::data::fetch::{fetch_series, FetchOutcome};
use crate::data::provider::MarketDataProvider;
use crate::data::symbol::{normalize_symbol, KRX_SUFFIX};
use crate::error::{Result, StockSignalError};
use crate::functions::indicators::{RSI, SMA};
use crate::functions::traits::{Indicator, VectorizedIndicator};
use crate::types::{
    column_to_dates, Analysis, AnalysisFailure, AnalysisRequest, IndicatorFrame, IndicatorRow,
    OhlcSeries, RequestResult, Signal,
};

const MA_SHORT: &str = "ma_short";
const MA_LONG: &str = "ma_long";
const RSI_COL: &str = "rsi";

/// Turns a daily price series into moving averages, RSI and a signal.
///
/// Holds configuration only; every call recomputes from its inputs.
#[derive(Debug, Clone)]
pub struct IndicatorPipeline {
    indicators: IndicatorConfig,
    krx_suffix: String,
}

impl Default for IndicatorPipeline {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl IndicatorPipeline {
    pub fn new(indicators: IndicatorConfig) -> Self {
        Self {
            indicators,
            krx_suffix: KRX_SUFFIX.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            indicators: config.indicators.clone(),
            krx_suffix: config.provider.krx_suffix.clone(),
        }
    }

    /// Smallest series whose last row has every indicator defined.
    pub fn min_rows(&self) -> usize {
        let warmups = [
            SMA::new(self.indicators.short_window).warmup(),
            SMA::new(self.indicators.long_window).warmup(),
            RSI::new(self.indicators.rsi_period).warmup(),
        ];
        warmups.into_iter().max().unwrap_or(0) + 1
    }

    pub fn normalize_symbol(&self, raw: &str) -> String {
        normalize_symbol(raw, &self.krx_suffix)
    }

    pub fn fetch_series(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
        lookback_days: u32,
        today: NaiveDate,
    ) -> FetchOutcome {
        fetch_series(provider, symbol, lookback_days, today)
    }

    /// Adds the two moving averages and RSI, classifies the last complete
    /// row, and drops every row with an undefined indicator. The retained
    /// rows are a contiguous suffix of the input.
    pub fn compute_indicators(&self, series: &OhlcSeries) -> Result<IndicatorFrame> {
        if series.is_empty() {
            return Err(StockSignalError::EmptySeries);
        }

        let short = SMA::new(self.indicators.short_window);
        let long = SMA::new(self.indicators.long_window);
        let rsi = RSI::new(self.indicators.rsi_period);

        let indicator_err = |e: anyhow::Error| StockSignalError::IndicatorError(e.to_string());
        let close = col("close");

        let df = series
            .to_dataframe()?
            .lazy()
            .with_columns([
                short.calculate_vectorized(close.clone()).map_err(indicator_err)?.alias(MA_SHORT),
                long.calculate_vectorized(close.clone()).map_err(indicator_err)?.alias(MA_LONG),
                rsi.calculate_vectorized(close).map_err(indicator_err)?.alias(RSI_COL),
            ])
            .filter(
                col(MA_SHORT)
                    .is_not_null()
                    .and(col(MA_LONG).is_not_null())
                    .and(col(RSI_COL).is_not_null()),
            )
            .select([col("date"), col("close"), col(MA_SHORT), col(MA_LONG), col(RSI_COL)])
            .collect()?;

        let rows = Self::collect_rows(&df)?;

        let signal = rows
            .last()
            .map(|last| classify_signal(last, &self.indicators))
            .unwrap_or(Signal::Hold);

        log::debug!(
            "Computed indicators: {} of {} rows retained, signal {}",
            rows.len(),
            series.len(),
            signal
        );

        Ok(IndicatorFrame { rows, signal })
    }

    fn collect_rows(df: &DataFrame) -> Result<Vec<IndicatorRow>> {
        let dates = column_to_dates(df, "date")?;
        let close = df.column("close")?.f64()?;
        let ma_short = df.column(MA_SHORT)?.f64()?;
        let ma_long = df.column(MA_LONG)?.f64()?;
        let rsi = df.column(RSI_COL)?.f64()?;

        let mut rows = Vec::with_capacity(df.height());
        for (i, date) in dates.into_iter().enumerate() {
            if let (Some(close), Some(ma_short), Some(ma_long), Some(rsi)) =
                (close.get(i), ma_short.get(i), ma_long.get(i), rsi.get(i))
            {
                rows.push(IndicatorRow {
                    date,
                    close,
                    ma_short,
                    ma_long,
                    rsi,
                });
            }
        }

        Ok(rows)
    }

    /// Runs one request end to end. Every failure is folded into an
    /// [`AnalysisFailure`]; an indicator frame with no complete rows is
    /// reported as no data.
    pub fn run(
        &self,
        provider: &dyn MarketDataProvider,
        request: &AnalysisRequest,
        today: NaiveDate,
    ) -> RequestResult {
        let symbol = self.normalize_symbol(&request.symbol);

        let series = match self.fetch_series(provider, &symbol, request.lookback_days, today) {
            FetchOutcome::Data(series) => series,
            FetchOutcome::NoData => return Err(AnalysisFailure::no_data(symbol)),
            FetchOutcome::Failed(e) => return Err(AnalysisFailure::fetch_error(symbol, e)),
        };

        if series.len() < self.min_rows() {
            log::info!(
                "{} has {} rows, not enough for a {}-day average",
                symbol,
                series.len(),
                self.indicators.long_window
            );
            return Err(AnalysisFailure::no_data(symbol));
        }

        let frame = self.compute_indicators(&series).map_err(|e| {
            log::warn!("Indicator computation failed for {}: {}", symbol, e);
            AnalysisFailure::fetch_error(symbol.clone(), e)
        })?;

        if frame.is_empty() {
            return Err(AnalysisFailure::no_data(symbol));
        }

        let summary = summarize(&frame).map_err(|e| AnalysisFailure::fetch_error(symbol.clone(), e))?;

        log::info!(
            "{}: {} rows, last close {:.2}, signal {}",
            symbol,
            frame.rows.len(),
            summary.last_close,
            summary.signal
        );

        Ok(Analysis {
            symbol,
            frame,
            summary,
        })
    }
}
