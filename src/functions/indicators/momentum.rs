use anyhow::{bail, Result};
use polars::prelude::{lit, when, EWMOptions, Expr};
use crate::functions::traits::{Indicator, VectorizedIndicator};

/// Relative Strength Index smoothed with an unadjusted EWM of
/// `alpha = 1 / period` (center of mass `period - 1`).
pub struct RSI {
    pub period: usize,
}

impl RSI {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    fn smoothed_ma(&self, series: Expr) -> Expr {
        series.ewm_mean(EWMOptions {
            alpha: 1.0 / self.period as f64,
            adjust: false,
            min_periods: 1,
            ..Default::default()
        })
    }
}

impl Indicator for RSI {
    fn ui_name(&self) -> &'static str { "Relative Strength Index" }
    fn label(&self) -> String { "RSI".to_string() }
    fn warmup(&self) -> usize { 0 }
}

impl VectorizedIndicator for RSI {
    fn calculate_vectorized(&self, series: Expr) -> Result<Expr> {
        if self.period == 0 {
            bail!("RSI: period must be at least 1");
        }

        // Step 1: Calculate price changes (first row has none)
        let delta = series.clone() - series.shift(lit(1));

        // Step 2: Separate gains and losses; a null delta falls to 0
        let gains = when(delta.clone().gt(lit(0.0)))
            .then(delta.clone())
            .otherwise(lit(0.0));
        let losses = when(delta.clone().lt(lit(0.0)))
            .then(delta.abs())
            .otherwise(lit(0.0));

        // Step 3: Smooth both legs
        let avg_gains = self.smoothed_ma(gains);
        let avg_losses = self.smoothed_ma(losses);

        // Step 4: RS and RSI; no losses at all reads as 100
        let rs = avg_gains / avg_losses.clone();
        let rsi = lit(100.0) - (lit(100.0) / (lit(1.0) + rs));

        Ok(when(avg_losses.eq(lit(0.0)))
            .then(lit(100.0))
            .otherwise(rsi))
    }
}
