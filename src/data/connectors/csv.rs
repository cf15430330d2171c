use crate::data::provider::MarketDataProvider;
use crate::error::{Result, StockSignalError};
use crate::types::{Bar, OhlcSeries};
use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use super::{types::RequiredColumn, validator::DataValidator};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| StockSignalError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load and validate CSV file
    pub fn load_and_validate<P: AsRef<Path>>(
        path: P,
    ) -> Result<(DataFrame, HashMap<RequiredColumn, String>)> {
        let df = Self::load(&path)?;

        let column_map = DataValidator::validate_ohlcv(&df)?;

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df);
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Ok((df, column_map))
    }

    /// Convert a validated frame into bars. Rows without a close are skipped.
    pub fn to_series(
        df: &DataFrame,
        column_map: &HashMap<RequiredColumn, String>,
    ) -> Result<OhlcSeries> {
        let dates = Self::parse_dates(df.column(Self::column_name(column_map, RequiredColumn::Date)?)?)?;

        let open = df.column(Self::column_name(column_map, RequiredColumn::Open)?)?.cast(&DataType::Float64)?;
        let high = df.column(Self::column_name(column_map, RequiredColumn::High)?)?.cast(&DataType::Float64)?;
        let low = df.column(Self::column_name(column_map, RequiredColumn::Low)?)?.cast(&DataType::Float64)?;
        let close = df.column(Self::column_name(column_map, RequiredColumn::Close)?)?.cast(&DataType::Float64)?;
        let volume = df.column(Self::column_name(column_map, RequiredColumn::Volume)?)?.cast(&DataType::Float64)?;

        let open = open.f64()?;
        let high = high.f64()?;
        let low = low.f64()?;
        let close = close.f64()?;
        let volume = volume.f64()?;

        let mut bars = Vec::with_capacity(df.height());
        for (i, date) in dates.into_iter().enumerate() {
            let (Some(date), Some(c)) = (date, close.get(i)) else {
                continue;
            };
            bars.push(Bar {
                date,
                open: open.get(i).unwrap_or(c),
                high: high.get(i).unwrap_or(c),
                low: low.get(i).unwrap_or(c),
                close: c,
                volume: volume.get(i).unwrap_or(0.0),
            });
        }

        Ok(OhlcSeries::new(bars))
    }

    fn column_name(
        column_map: &HashMap<RequiredColumn, String>,
        required: RequiredColumn,
    ) -> Result<&str> {
        column_map.get(&required).map(|s| s.as_str()).ok_or_else(|| {
            StockSignalError::DataLoading(format!("Missing required column: {}", required.as_str()))
        })
    }

    /// Accepts a `Date` column or strings starting with `YYYY-MM-DD`.
    fn parse_dates(column: &Column) -> Result<Vec<Option<NaiveDate>>> {
        match column.dtype() {
            DataType::Date => {
                let days = column.cast(&DataType::Int32)?;
                Ok(days
                    .i32()?
                    .into_iter()
                    .map(|d| d.and_then(crate::types::epoch_days_to_date))
                    .collect())
            }
            DataType::String => {
                let mut dates = Vec::with_capacity(column.len());
                for (i, value) in column.str()?.into_iter().enumerate() {
                    let date = match value {
                        Some(text) => Some(Self::parse_date(text).ok_or_else(|| {
                            StockSignalError::DataLoading(format!(
                                "Invalid date '{}' at row {}",
                                text, i
                            ))
                        })?),
                        None => None,
                    };
                    dates.push(date);
                }
                Ok(dates)
            }
            other => Err(StockSignalError::DataLoading(format!(
                "Date column '{}' has unsupported type {:?}",
                column.name(),
                other
            ))),
        }
    }

    fn parse_date(text: &str) -> Option<NaiveDate> {
        let day = text.trim().get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Reads daily bars from a local OHLCV CSV file. The symbol is not used to
/// select rows; the file is assumed to hold a single instrument.
pub struct CsvProvider {
    path: PathBuf,
}

impl CsvProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MarketDataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn history(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<OhlcSeries> {
        log::info!("Loading {} from {}", symbol, self.path.display());
        let (df, column_map) = CsvConnector::load_and_validate(&self.path)?;
        let series = CsvConnector::to_series(&df, &column_map)?;
        Ok(series.within(start, end))
    }
}
