pub mod analysis;
pub mod indicators;
pub mod manager;
pub mod provider;
pub mod traits;

pub use analysis::AnalysisConfig;
pub use indicators::IndicatorConfig;
pub use manager::{AppConfig, ConfigManager, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use provider::{ProviderConfig, ProviderKind};
pub use traits::ConfigSection;
