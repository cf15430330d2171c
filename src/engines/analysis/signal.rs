use crate::config::IndicatorConfig;
use crate::types::{IndicatorRow, Signal};

/// Classifies the latest indicator row.
///
/// Only two quadrants produce a call: oversold with the short average above
/// the long one (`StrongBuy`), and overbought with the short average below
/// the long one (`StrongSell`). Everything else, including oversold in a
/// downtrend, is `Hold`.
pub fn classify_signal(row: &IndicatorRow, config: &IndicatorConfig) -> Signal {
    if row.rsi < config.oversold && row.ma_short > row.ma_long {
        Signal::StrongBuy
    } else if row.rsi > config.overbought && row.ma_short < row.ma_long {
        Signal::StrongSell
    } else {
        Signal::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(rsi: f64, ma_short: f64, ma_long: f64) -> IndicatorRow {
        IndicatorRow {
            date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            close: 100.0,
            ma_short,
            ma_long,
            rsi,
        }
    }

    #[test]
    fn test_strong_buy() {
        let config = IndicatorConfig::default();
        assert_eq!(classify_signal(&row(25.0, 105.0, 100.0), &config), Signal::StrongBuy);
    }

    #[test]
    fn test_strong_sell() {
        let config = IndicatorConfig::default();
        assert_eq!(classify_signal(&row(75.0, 95.0, 100.0), &config), Signal::StrongSell);
    }

    #[test]
    fn test_uncovered_quadrants_hold() {
        let config = IndicatorConfig::default();
        // Oversold but short average not above long
        assert_eq!(classify_signal(&row(25.0, 95.0, 100.0), &config), Signal::Hold);
        assert_eq!(classify_signal(&row(25.0, 100.0, 100.0), &config), Signal::Hold);
        // Overbought but short average not below long
        assert_eq!(classify_signal(&row(75.0, 105.0, 100.0), &config), Signal::Hold);
        assert_eq!(classify_signal(&row(75.0, 100.0, 100.0), &config), Signal::Hold);
        // Neutral RSI
        assert_eq!(classify_signal(&row(50.0, 105.0, 100.0), &config), Signal::Hold);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let config = IndicatorConfig::default();
        assert_eq!(classify_signal(&row(30.0, 105.0, 100.0), &config), Signal::Hold);
        assert_eq!(classify_signal(&row(70.0, 95.0, 100.0), &config), Signal::Hold);
    }
}
