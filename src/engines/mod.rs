pub mod analysis;

pub use analysis::{classify_signal, summarize, IndicatorPipeline};
