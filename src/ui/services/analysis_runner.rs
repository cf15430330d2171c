use crate::data::MarketDataProvider;
use crate::engines::IndicatorPipeline;
use crate::types::{AnalysisFailure, AnalysisRequest, RequestResult};
use chrono::NaiveDate;
use std::thread::{self, JoinHandle};

/// Runs one analysis request off the UI thread so the window keeps
/// repainting while the provider blocks.
pub struct AnalysisRunner {
    handle: Option<JoinHandle<RequestResult>>,
    symbol: String,
}

impl AnalysisRunner {
    /// Start the request in a background thread
    pub fn start(
        pipeline: IndicatorPipeline,
        provider: Box<dyn MarketDataProvider>,
        request: AnalysisRequest,
        today: NaiveDate,
    ) -> std::io::Result<Self> {
        let symbol = pipeline.normalize_symbol(&request.symbol);

        let handle = thread::Builder::new()
            .name("analysis".to_string())
            .spawn(move || pipeline.run(provider.as_ref(), &request, today))?;

        Ok(Self {
            handle: Some(handle),
            symbol,
        })
    }

    /// Resolved symbol of the request in flight
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Check if the request is complete and take its result
    pub fn try_get_result(&mut self) -> Option<RequestResult> {
        let handle = self.handle.take()?;
        if !handle.is_finished() {
            // Not finished yet, put handle back
            self.handle = Some(handle);
            return None;
        }

        match handle.join() {
            Ok(result) => Some(result),
            Err(_) => {
                log::error!("Analysis thread panicked for {}", self.symbol);
                Some(Err(AnalysisFailure::fetch_error(
                    self.symbol.clone(),
                    "analysis thread panicked",
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::types::{FailureKind, OhlcSeries};

    struct EmptyProvider;

    impl MarketDataProvider for EmptyProvider {
        fn name(&self) -> &str {
            "empty"
        }

        fn history(&self, _symbol: &str, _start: NaiveDate, _end: NaiveDate) -> Result<OhlcSeries> {
            Ok(OhlcSeries::default())
        }
    }

    #[test]
    fn test_runner_delivers_result_once() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let mut runner = AnalysisRunner::start(
            IndicatorPipeline::default(),
            Box::new(EmptyProvider),
            AnalysisRequest::from_input("005930", 200),
            today,
        )
        .unwrap();
        assert_eq!(runner.symbol(), "005930.KS");

        let result = loop {
            if let Some(result) = runner.try_get_result() {
                break result;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        };

        let failure = result.unwrap_err();
        assert_eq!(failure.kind, FailureKind::NoData);
        assert!(runner.try_get_result().is_none());
    }
}
