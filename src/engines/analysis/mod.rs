pub mod pipeline;
pub mod signal;
pub mod summary;

pub use pipeline::IndicatorPipeline;
pub use signal::classify_signal;
pub use summary::summarize;
