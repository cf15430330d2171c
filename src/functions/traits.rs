use polars::prelude::*;
use anyhow::Result;

/// Base trait for all indicators
pub trait Indicator: Send + Sync {
    /// Display name
    fn ui_name(&self) -> &'static str;

    /// Column label shown in charts and tables, e.g. `MA_20`
    fn label(&self) -> String;

    /// Number of leading rows left undefined by the calculation
    fn warmup(&self) -> usize;
}

/// Trait for vectorized indicators computed with Polars expressions
pub trait VectorizedIndicator: Indicator {
    /// Calculate over an entire series expression
    fn calculate_vectorized(&self, series: Expr) -> Result<Expr>;
}
