use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StockSignalError};

/// `NaiveDate::num_days_from_ce` of 1970-01-01, the origin of polars `Date`.
pub const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub fn date_to_epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

pub fn epoch_days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
}

/// One daily OHLCV record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Bar where every price field equals `close`.
    pub fn from_close(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        }
    }
}

/// Daily price history, ascending by date with unique dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcSeries {
    bars: Vec<Bar>,
}

impl OhlcSeries {
    /// Sorts by date and keeps the last bar seen for a duplicated date.
    pub fn new(mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.date);
        let mut deduped: Vec<Bar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => deduped.push(bar),
            }
        }
        Self { bars: deduped }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Keeps the bars with `start <= date < end`.
    pub fn within(self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            bars: self
                .bars
                .into_iter()
                .filter(|b| b.date >= start && b.date < end)
                .collect(),
        }
    }

    /// Columns `date` (Date), `open`, `high`, `low`, `close`, `volume`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let days: Vec<i32> = self.bars.iter().map(|b| date_to_epoch_days(b.date)).collect();
        let date = Column::new("date".into(), days).cast(&DataType::Date)?;

        let field = |f: fn(&Bar) -> f64| -> Vec<f64> { self.bars.iter().map(f).collect() };

        let df = DataFrame::new(vec![
            date,
            Column::new("open".into(), field(|b| b.open)),
            Column::new("high".into(), field(|b| b.high)),
            Column::new("low".into(), field(|b| b.low)),
            Column::new("close".into(), field(|b| b.close)),
            Column::new("volume".into(), field(|b| b.volume)),
        ])?;

        Ok(df)
    }
}

/// Coarse recommendation derived from the most recent indicator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    StrongBuy,
    StrongSell,
    Hold,
}

impl Signal {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::StrongSell => "Strong Sell",
            Self::Hold => "Hold",
        }
    }

    pub fn commentary(&self) -> &'static str {
        match self {
            Self::StrongBuy => "Indicators are positive!",
            Self::StrongSell => "Indicators are negative!",
            Self::Hold => "Wait and watch the market a little longer.",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One fully-defined row of the indicator frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: f64,
    pub ma_short: f64,
    pub ma_long: f64,
    pub rsi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub rows: Vec<IndicatorRow>,
    pub signal: Signal,
}

impl IndicatorFrame {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    /// Table view with the frame's signal replicated into a `signal` column.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let days: Vec<i32> = self.rows.iter().map(|r| date_to_epoch_days(r.date)).collect();
        let date = Column::new("date".into(), days).cast(&DataType::Date)?;

        let field = |f: fn(&IndicatorRow) -> f64| -> Vec<f64> { self.rows.iter().map(f).collect() };
        let signal: Vec<&str> = vec![self.signal.label(); self.rows.len()];

        let df = DataFrame::new(vec![
            date,
            Column::new("close".into(), field(|r| r.close)),
            Column::new("ma_short".into(), field(|r| r.ma_short)),
            Column::new("ma_long".into(), field(|r| r.ma_long)),
            Column::new("rsi".into(), field(|r| r.rsi)),
            Column::new("signal".into(), signal),
        ])?;

        Ok(df)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub last_close: f64,
    pub signal: Signal,
    pub period_max: f64,
    pub period_min: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// Immutable parameters of one "run analysis" click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub symbol: String,
    pub lookback_days: u32,
}

impl AnalysisRequest {
    /// Trims and upper-cases free-text ticker input.
    pub fn from_input(raw_symbol: &str, lookback_days: u32) -> Self {
        Self {
            symbol: raw_symbol.trim().to_uppercase(),
            lookback_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub symbol: String,
    pub frame: IndicatorFrame,
    pub summary: Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    NoData,
    FetchError,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoData => "No data",
            Self::FetchError => "Data loading error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub symbol: String,
    pub kind: FailureKind,
    /// Internal error text, for logs only.
    pub cause: Option<String>,
}

impl AnalysisFailure {
    pub fn no_data(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            kind: FailureKind::NoData,
            cause: None,
        }
    }

    pub fn fetch_error(symbol: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self {
            symbol: symbol.into(),
            kind: FailureKind::FetchError,
            cause: Some(cause.to_string()),
        }
    }

    /// Message shown to the user; never includes `cause`.
    pub fn user_message(&self) -> String {
        format!(
            "Analysis failed: {} ({}). Check the ticker or adjust the lookback period.",
            self.kind.label(),
            self.symbol
        )
    }
}

pub type RequestResult = std::result::Result<Analysis, AnalysisFailure>;

pub(crate) fn column_to_dates(df: &DataFrame, name: &str) -> Result<Vec<NaiveDate>> {
    let days = df.column(name)?.cast(&DataType::Int32)?;
    let days = days.i32()?;
    days.into_iter()
        .map(|d| {
            d.and_then(epoch_days_to_date).ok_or_else(|| {
                StockSignalError::DataLoading(format!("Invalid date in column '{}'", name))
            })
        })
        .collect()
}
