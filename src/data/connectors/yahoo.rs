use crate::config::provider::ProviderConfig;
use crate::data::provider::MarketDataProvider;
use crate::error::{Result, StockSignalError};
use crate::types::{Bar, OhlcSeries};
use chrono::{DateTime, NaiveDate};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance chart API response structures
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    symbol: String,
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

/// Daily history from the Yahoo Finance chart endpoint.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl YahooProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            StockSignalError::Configuration(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        Ok(Self { client, base_url })
    }

    /// The symbol is pushed as a single percent-encoded path segment.
    fn chart_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Url> {
        let to_unix = |d: NaiveDate| d.and_hms_opt(0, 0, 0).map(|t| t.and_utc().timestamp()).unwrap_or(0);

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StockSignalError::Configuration(format!("Base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("period1", &to_unix(start).to_string())
            .append_pair("period2", &to_unix(end).to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "history");

        Ok(url)
    }

    /// Turns a chart payload into bars. Rows with a null close are skipped.
    fn parse_chart(body: &str) -> Result<OhlcSeries> {
        let response: ChartResponse = serde_json::from_str(body)?;

        if let Some(error) = response.chart.error {
            return Err(StockSignalError::Provider(format!(
                "Yahoo Finance error: {} - {}",
                error.code, error.description
            )));
        }

        let Some(data) = response.chart.result.and_then(|r| r.into_iter().next()) else {
            return Ok(OhlcSeries::default());
        };

        let timestamps = data.timestamp.unwrap_or_default();
        let quote = data.indicators.quote.into_iter().next().unwrap_or_default();
        let offset = data.meta.gmtoffset;

        let at = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            let Some(close) = at(&quote.close, i) else {
                continue;
            };
            let Some(date) = DateTime::from_timestamp(ts + offset, 0).map(|t| t.date_naive()) else {
                continue;
            };
            bars.push(Bar {
                date,
                open: at(&quote.open, i).unwrap_or(close),
                high: at(&quote.high, i).unwrap_or(close),
                low: at(&quote.low, i).unwrap_or(close),
                close,
                volume: at(&quote.volume, i).unwrap_or(0.0),
            });
        }

        log::debug!("Parsed {} bars for {}", bars.len(), data.meta.symbol);
        Ok(OhlcSeries::new(bars))
    }
}

impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    fn history(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<OhlcSeries> {
        let url = self.chart_url(symbol, start, end)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        // Unknown symbols come back as 404 with an error payload
        match Self::parse_chart(&body) {
            Ok(series) if status.is_success() => Ok(series),
            Ok(_) => Err(StockSignalError::Provider(format!(
                "Yahoo Finance returned HTTP {} for {}",
                status, symbol
            ))),
            Err(e) if status.is_success() => Err(e),
            Err(e) => Err(StockSignalError::Provider(format!(
                "Yahoo Finance returned HTTP {} for {}: {}",
                status, symbol, e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "chart": {
            "result": [{
                "meta": { "symbol": "005930.KS", "gmtoffset": 32400 },
                "timestamp": [1735776000, 1735862400, 1736121600],
                "indicators": {
                    "quote": [{
                        "open":   [53000.0, 54000.0, null],
                        "high":   [54000.0, 55000.0, null],
                        "low":    [52500.0, 53500.0, null],
                        "close":  [53400.0, 54400.0, null],
                        "volume": [1000, 2000, null]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_skips_null_close() {
        let series = YahooProvider::parse_chart(PAYLOAD).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.bars()[0].close, 53400.0);
        assert_eq!(series.bars()[1].volume, 2000.0);
    }

    #[test]
    fn test_parse_applies_exchange_offset() {
        let series = YahooProvider::parse_chart(PAYLOAD).unwrap();

        // 2025-01-02 00:00 UTC is 09:00 in Seoul, same calendar day
        assert_eq!(series.bars()[0].date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_error_object() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let err = YahooProvider::parse_chart(body).unwrap_err();
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_parse_no_timestamps_is_empty() {
        let body = r#"{"chart":{"result":[{"meta":{"symbol":"AAPL"},"indicators":{"quote":[{}]}}],"error":null}}"#;
        let series = YahooProvider::parse_chart(body).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(YahooProvider::parse_chart("<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_chart_url_uses_unix_window() {
        let provider = YahooProvider::new(&ProviderConfig::default()).unwrap();
        let url = provider
            .chart_url(
                "AAPL",
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/AAPL?period1=1735689600&period2=1735776000&interval=1d&events=history"
        );
    }

    #[test]
    fn test_chart_url_encodes_symbol_as_one_segment() {
        let provider = YahooProvider::new(&ProviderConfig::default()).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let url = provider.chart_url("A/B?x#y", day, day).unwrap();

        assert_eq!(url.path(), "/v8/finance/chart/A%2FB%3Fx%23y");
        assert_eq!(url.fragment(), None);
        assert_eq!(url.query_pairs().count(), 4);
    }

    #[test]
    fn test_base_url_path_is_kept() {
        let config = ProviderConfig {
            base_url: "http://localhost:8080/proxy/".to_string(),
            ..ProviderConfig::default()
        };
        let provider = YahooProvider::new(&config).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let url = provider.chart_url("005930.KS", day, day).unwrap();

        assert_eq!(url.path(), "/proxy/v8/finance/chart/005930.KS");
    }
}
