#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use stocksignal::{Bar, OhlcSeries};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// One bar per calendar day starting at 2025-01-01.
pub fn series_from_closes(closes: &[f64]) -> OhlcSeries {
    OhlcSeries::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::from_close(start_date() + Duration::days(i as i64), c))
            .collect(),
    )
}

/// 185 days rising by 1, then 15 days falling by 3: RSI ends near 14 while
/// MA_20 is still just above MA_50.
pub fn sharp_pullback_closes() -> Vec<f64> {
    (0..200)
        .map(|i| {
            if i <= 184 {
                100.0 + i as f64
            } else {
                284.0 - 3.0 * (i - 184) as f64
            }
        })
        .collect()
}

/// Mirror of [`sharp_pullback_closes`]: long decline, then a sharp rally.
pub fn sharp_rally_closes() -> Vec<f64> {
    (0..200)
        .map(|i| {
            if i <= 184 {
                300.0 - i as f64
            } else {
                116.0 + 3.0 * (i - 184) as f64
            }
        })
        .collect()
}

/// Bounded oscillation around a slow drift.
pub fn wavy_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 10.0 * (i as f64 * 0.3).sin() + 0.1 * i as f64)
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unadjusted EWM RSI with the first delta counted as zero.
pub fn reference_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let alpha = 1.0 / period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    let mut out = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        let delta = if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        if i == 0 {
            avg_gain = gain;
            avg_loss = loss;
        } else {
            avg_gain = (1.0 - alpha) * avg_gain + alpha * gain;
            avg_loss = (1.0 - alpha) * avg_loss + alpha * loss;
        }
        out.push(if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        });
    }

    out
}
