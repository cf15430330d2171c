use super::{
    analysis::AnalysisConfig,
    indicators::IndicatorConfig,
    provider::ProviderConfig,
    traits::ConfigSection,
};
use crate::error::StockSignalError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "stocksignal.toml";

/// Environment overrides look like `STOCKSIGNAL__INDICATORS__RSI_PERIOD=21`.
pub const ENV_PREFIX: &str = "STOCKSIGNAL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub indicators: IndicatorConfig,
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), StockSignalError> {
        validate_section(&self.analysis)?;
        validate_section(&self.indicators)?;
        validate_section(&self.provider)?;
        Ok(())
    }
}

/// Prefixes a section's validation message with its TOML table name.
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), StockSignalError> {
    section.validate().map_err(|e| match e {
        StockSignalError::Configuration(msg) => {
            StockSignalError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layers defaults, the TOML file at `path` (if it exists) and
    /// `STOCKSIGNAL__*` environment variables, then validates the result.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StockSignalError> {
        let config = Self::build(path.as_ref(), true)?;
        Ok(Self { config })
    }

    /// Like [`ConfigManager::load`] without the environment layer.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StockSignalError> {
        let config = Self::build(path.as_ref(), false)?;
        Ok(Self { config })
    }

    fn build(path: &Path, with_env: bool) -> Result<AppConfig, StockSignalError> {
        let defaults = config::Config::try_from(&AppConfig::default())
            .map_err(|e| StockSignalError::Configuration(format!("Failed to build defaults: {}", e)))?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(false));

        if with_env {
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );
        }

        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| StockSignalError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;

        if path.exists() {
            log::info!("Loaded configuration from {}", path.display());
        } else {
            log::info!("No config file at {}, using defaults", path.display());
        }

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StockSignalError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| StockSignalError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| StockSignalError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), StockSignalError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
