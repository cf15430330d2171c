use crate::error::{Result, StockSignalError};
use crate::types::{IndicatorFrame, Summary};

/// Headline numbers over the retained rows.
pub fn summarize(frame: &IndicatorFrame) -> Result<Summary> {
    let (first, last) = match (frame.rows.first(), frame.rows.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(StockSignalError::EmptySeries),
    };

    let (period_min, period_max) = frame
        .rows
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), r| {
            (min.min(r.close), max.max(r.close))
        });

    Ok(Summary {
        last_close: last.close,
        signal: frame.signal,
        period_max,
        period_min,
        first_date: first.date,
        last_date: last.date,
    })
}
