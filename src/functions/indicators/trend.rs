use crate::functions::traits::{Indicator, VectorizedIndicator};
use anyhow::{bail, Result};
use polars::prelude::{Expr, RollingOptionsFixedWindow};

// --- SMA ---
pub struct SMA {
    pub period: usize,
}

impl SMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for SMA {
    fn ui_name(&self) -> &'static str {
        "Simple Moving Average"
    }
    fn label(&self) -> String {
        format!("MA_{}", self.period)
    }
    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }
}

impl VectorizedIndicator for SMA {
    fn calculate_vectorized(&self, series: Expr) -> Result<Expr> {
        if self.period == 0 {
            bail!("SMA: period must be at least 1");
        }

        // Undefined until a full window is available
        let options = RollingOptionsFixedWindow {
            window_size: self.period,
            min_periods: self.period,
            ..Default::default()
        };

        Ok(series.rolling_mean(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use polars::prelude::*;

    #[test]
    fn test_sma_warmup_is_null() {
        let df = df! {
            "close" => &[1.0, 2.0, 3.0, 4.0, 5.0],
        }
        .unwrap();

        let sma = SMA::new(3);
        let expr = sma.calculate_vectorized(col("close")).unwrap();
        let out = df.lazy().select([expr.alias("sma")]).collect().unwrap();
        let values = out.column("sma").unwrap().f64().unwrap().clone();

        assert_eq!(values.get(0), None);
        assert_eq!(values.get(1), None);
        assert_eq!(values.get(2), Some(2.0));
        assert_eq!(sma.warmup(), 2);
        assert_eq!(sma.label(), "MA_3");
    }

    #[test]
    fn test_sma_zero_period_rejected() {
        assert!(SMA::new(0).calculate_vectorized(col("close")).is_err());
    }
}
