use super::traits::ConfigSection;
use crate::data::symbol::KRX_SUFFIX;
use crate::error::StockSignalError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Yahoo,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub csv_path: Option<PathBuf>,
    /// Appended to bare 6-digit Korean listing codes.
    pub krx_suffix: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Yahoo,
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 30,
            csv_path: None,
            krx_suffix: KRX_SUFFIX.to_string(),
        }
    }
}

impl ConfigSection for ProviderConfig {
    fn section_name() -> &'static str {
        "provider"
    }

    fn validate(&self) -> Result<(), StockSignalError> {
        if self.kind == ProviderKind::Yahoo && !self.base_url.starts_with("http") {
            return Err(StockSignalError::Configuration(format!(
                "Provider base URL must be http(s), got '{}'",
                self.base_url
            )));
        }
        if self.kind == ProviderKind::Csv && self.csv_path.is_none() {
            return Err(StockSignalError::Configuration(
                "provider.csv_path is required when provider.kind = \"csv\"".to_string()
            ));
        }
        if self.timeout_secs == 0 {
            return Err(StockSignalError::Configuration(
                "Provider timeout must be at least 1 second".to_string()
            ));
        }
        Ok(())
    }
}
