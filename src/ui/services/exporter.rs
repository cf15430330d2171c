use crate::error::Result;
use crate::types::IndicatorFrame;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Writes the indicator table, including the broadcast `signal` column.
pub fn export_frame_csv<P: AsRef<Path>>(frame: &IndicatorFrame, path: P) -> Result<()> {
    let mut df = frame.to_dataframe()?;
    let mut file = File::create(path.as_ref())?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    log::info!("Exported {} rows to {}", df.height(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IndicatorRow, Signal};
    use chrono::NaiveDate;

    #[test]
    fn test_export_writes_signal_column() {
        let frame = IndicatorFrame {
            rows: vec![
                IndicatorRow {
                    date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
                    close: 10.0,
                    ma_short: 9.5,
                    ma_long: 9.0,
                    rsi: 25.0,
                },
                IndicatorRow {
                    date: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
                    close: 11.0,
                    ma_short: 9.7,
                    ma_long: 9.1,
                    rsi: 28.0,
                },
            ],
            signal: Signal::StrongBuy,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.csv");
        export_frame_csv(&frame, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("date,close,ma_short,ma_long,rsi,signal"));
        assert!(lines.next().unwrap().starts_with("2025-02-03,"));
        assert_eq!(contents.matches("Strong Buy").count(), 2);
    }
}
