use super::traits::ConfigSection;
use crate::error::StockSignalError;
use serde::{Deserialize, Serialize};

/// Defaults and bounds for the request form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub default_symbol: String,
    pub default_lookback_days: u32,
    pub min_lookback_days: u32,
    pub max_lookback_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_symbol: "005930".to_string(),
            default_lookback_days: 200,
            min_lookback_days: 90,
            max_lookback_days: 365,
        }
    }
}

impl AnalysisConfig {
    pub fn clamp_lookback(&self, days: u32) -> u32 {
        days.clamp(self.min_lookback_days, self.max_lookback_days)
    }
}

impl ConfigSection for AnalysisConfig {
    fn section_name() -> &'static str {
        "analysis"
    }

    fn validate(&self) -> Result<(), StockSignalError> {
        if self.min_lookback_days == 0 {
            return Err(StockSignalError::Configuration(
                "Minimum lookback must be at least 1 day".to_string()
            ));
        }
        if self.min_lookback_days > self.max_lookback_days {
            return Err(StockSignalError::Configuration(
                "Minimum lookback must not exceed maximum lookback".to_string()
            ));
        }
        if !(self.min_lookback_days..=self.max_lookback_days).contains(&self.default_lookback_days) {
            return Err(StockSignalError::Configuration(format!(
                "Default lookback must be between {} and {} days",
                self.min_lookback_days, self.max_lookback_days
            )));
        }
        Ok(())
    }
}
