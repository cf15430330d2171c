use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockSignalError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Indicator error: {0}")]
    IndicatorError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Series is empty")]
    EmptySeries,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StockSignalError>;
