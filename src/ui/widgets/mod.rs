pub mod indicator_table;
pub mod price_chart;
pub mod signal_banner;

pub use indicator_table::IndicatorTable;
pub use price_chart::PriceChart;
pub use signal_banner::SignalBanner;
