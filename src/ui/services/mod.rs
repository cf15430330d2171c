pub mod analysis_runner;
pub mod exporter;

pub use analysis_runner::AnalysisRunner;
pub use exporter::export_frame_csv;
