pub mod momentum;
pub mod trend;

pub use trend::SMA;
pub use momentum::RSI;
