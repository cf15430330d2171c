use chrono::{Duration, NaiveDate};
use std::sync::Mutex;
use stocksignal::data::{fetch_series, FetchOutcome, MarketDataProvider};
use stocksignal::{
    AnalysisRequest, FailureKind, IndicatorPipeline, OhlcSeries, Result, Signal, StockSignalError,
};

mod common;

/// Returns a fixed series and records what was asked for.
struct FixtureProvider {
    series: OhlcSeries,
    calls: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
}

impl FixtureProvider {
    fn new(series: OhlcSeries) -> Self {
        Self {
            series,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MarketDataProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    fn history(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<OhlcSeries> {
        self.calls.lock().unwrap().push((symbol.to_string(), start, end));
        Ok(self.series.clone())
    }
}

struct FailingProvider;

impl MarketDataProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn history(&self, symbol: &str, _start: NaiveDate, _end: NaiveDate) -> Result<OhlcSeries> {
        Err(StockSignalError::Provider(format!("connection refused for {}", symbol)))
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
}

#[test]
fn test_korean_code_strong_buy_scenario() {
    let provider = FixtureProvider::new(common::series_from_closes(&common::sharp_pullback_closes()));
    let pipeline = IndicatorPipeline::default();
    let request = AnalysisRequest::from_input("005930", 200);

    let analysis = pipeline.run(&provider, &request, today()).unwrap();

    assert_eq!(analysis.symbol, "005930.KS");
    assert_eq!(analysis.summary.signal, Signal::StrongBuy);
    assert_eq!(analysis.frame.rows.len(), 200 - 49);

    let calls = provider.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], ("005930.KS".to_string(), today() - Duration::days(200), today()));
}

#[test]
fn test_plain_ticker_passes_through() {
    let provider = FixtureProvider::new(common::series_from_closes(&common::wavy_closes(120)));
    let request = AnalysisRequest::from_input(" aapl", 120);

    let analysis = IndicatorPipeline::default().run(&provider, &request, today()).unwrap();
    assert_eq!(analysis.symbol, "AAPL");
}

#[test]
fn test_fetch_outcomes_are_distinguishable() {
    let empty = FixtureProvider::new(OhlcSeries::default());
    let outcome = fetch_series(&empty, "AAPL", 200, today());
    assert!(outcome.is_no_data());

    let outcome = fetch_series(&FailingProvider, "AAPL", 200, today());
    assert!(matches!(outcome, FetchOutcome::Failed(StockSignalError::Provider(_))));

    let full = FixtureProvider::new(common::series_from_closes(&common::wavy_closes(10)));
    match fetch_series(&full, "AAPL", 200, today()) {
        FetchOutcome::Data(series) => assert_eq!(series.len(), 10),
        other => panic!("expected data, got {:?}", other),
    }
}

#[test]
fn test_zero_lookback_is_rejected_without_calling_provider() {
    let provider = FixtureProvider::new(common::series_from_closes(&common::wavy_closes(10)));
    let outcome = fetch_series(&provider, "AAPL", 0, today());

    assert!(matches!(outcome, FetchOutcome::Failed(_)));
    assert!(provider.calls.lock().unwrap().is_empty());
}

#[test]
fn test_no_data_failure() {
    let provider = FixtureProvider::new(OhlcSeries::default());
    let request = AnalysisRequest::from_input("005930", 90);

    let failure = IndicatorPipeline::default().run(&provider, &request, today()).unwrap_err();
    assert_eq!(failure.kind, FailureKind::NoData);
    assert_eq!(failure.symbol, "005930.KS");
    assert_eq!(failure.cause, None);
}

#[test]
fn test_fetch_error_keeps_cause_internal() {
    let request = AnalysisRequest::from_input("ZZZZ", 90);

    let failure = IndicatorPipeline::default().run(&FailingProvider, &request, today()).unwrap_err();
    assert_eq!(failure.kind, FailureKind::FetchError);
    assert!(failure.cause.as_deref().unwrap().contains("connection refused"));
    assert!(!failure.user_message().contains("connection refused"));
}

#[test]
fn test_too_few_rows_reported_as_no_data() {
    let provider = FixtureProvider::new(common::series_from_closes(&common::wavy_closes(30)));
    let request = AnalysisRequest::from_input("MSFT", 90);

    let failure = IndicatorPipeline::default().run(&provider, &request, today()).unwrap_err();
    assert_eq!(failure.kind, FailureKind::NoData);
}
