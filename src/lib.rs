//! Daily price analysis for a single ticker: simple moving averages, RSI and
//! a coarse buy/sell/hold call, with an egui dashboard on top.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod functions;
pub mod types;
pub mod ui;

pub use config::{AppConfig, ConfigManager};
pub use data::{fetch_series, normalize_symbol, FetchOutcome, MarketDataProvider};
pub use engines::{summarize, IndicatorPipeline};
pub use error::{Result, StockSignalError};
pub use types::{
    Analysis, AnalysisFailure, AnalysisRequest, Bar, FailureKind, IndicatorFrame, IndicatorRow,
    OhlcSeries, RequestResult, Signal, Summary,
};
