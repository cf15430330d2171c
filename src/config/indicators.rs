use super::traits::ConfigSection;
use crate::error::StockSignalError;
use serde::{Deserialize, Serialize};

/// Indicator windows and signal thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub rsi_period: usize,
    pub oversold: f64,
    pub overbought: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            short_window: 20,
            long_window: 50,
            rsi_period: 14,
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl ConfigSection for IndicatorConfig {
    fn section_name() -> &'static str {
        "indicators"
    }

    fn validate(&self) -> Result<(), StockSignalError> {
        if self.short_window == 0 {
            return Err(StockSignalError::Configuration(
                "Short moving-average window must be at least 1".to_string()
            ));
        }
        if self.short_window >= self.long_window {
            return Err(StockSignalError::Configuration(
                "Short moving-average window must be shorter than the long window".to_string()
            ));
        }
        if self.rsi_period < 2 {
            return Err(StockSignalError::Configuration(
                "RSI period must be at least 2".to_string()
            ));
        }
        if !(0.0..=100.0).contains(&self.oversold) || !(0.0..=100.0).contains(&self.overbought) {
            return Err(StockSignalError::Configuration(
                "RSI thresholds must be between 0 and 100".to_string()
            ));
        }
        if self.oversold >= self.overbought {
            return Err(StockSignalError::Configuration(
                "Oversold threshold must be below overbought threshold".to_string()
            ));
        }
        Ok(())
    }
}
