use crate::config::IndicatorConfig;
use crate::functions::indicators::{RSI, SMA};
use crate::functions::traits::Indicator;
use crate::types::IndicatorFrame;

pub struct IndicatorTable;

impl IndicatorTable {
    /// Newest rows first; the frame's signal is repeated on every row.
    pub fn show(ui: &mut egui::Ui, frame: &IndicatorFrame, indicators: &IndicatorConfig) {
        egui::ScrollArea::vertical()
            .id_salt("indicator_table_scroll")
            .max_height(320.0)
            .show(ui, |ui| {
                egui::Grid::new("indicator_table")
                    .striped(true)
                    .show(ui, |ui| {
                        // Header
                        ui.strong("Date");
                        ui.strong("Close");
                        let columns: [&dyn Indicator; 3] = [
                            &SMA::new(indicators.short_window),
                            &SMA::new(indicators.long_window),
                            &RSI::new(indicators.rsi_period),
                        ];
                        for indicator in columns {
                            ui.strong(indicator.label()).on_hover_text(indicator.ui_name());
                        }
                        ui.strong("Signal");
                        ui.end_row();

                        for row in frame.rows.iter().rev() {
                            ui.label(row.date.to_string());
                            ui.label(format!("{:.2}", row.close));
                            ui.label(format!("{:.2}", row.ma_short));
                            ui.label(format!("{:.2}", row.ma_long));
                            ui.label(format!("{:.1}", row.rsi));
                            ui.label(frame.signal.label());
                            ui.end_row();
                        }
                    });
            });
    }
}
