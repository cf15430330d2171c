pub mod connectors;
pub mod fetch;
pub mod provider;
pub mod symbol;

pub use connectors::{CsvConnector, CsvProvider, YahooProvider};
pub use fetch::{fetch_series, FetchOutcome};
pub use provider::{build_provider, MarketDataProvider};
pub use symbol::{normalize_symbol, KRX_SUFFIX};
