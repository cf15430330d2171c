use crate::types::{Analysis, AnalysisFailure};
use crate::ui::services::export_frame_csv;
use crate::ui::state::AppState;
use crate::ui::widgets::{IndicatorTable, PriceChart, SignalBanner};

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let mut export_status = None;

        match &state.result {
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Enter a ticker and click 'Run analysis' to start.");
                });
            }
            Some(Err(failure)) => Self::show_failure(ui, failure),
            Some(Ok(analysis)) => {
                export_status = Self::show_analysis(ui, state, analysis);
            }
        }

        if let Some(message) = export_status {
            state.status_message = message;
        }
    }

    fn show_failure(ui: &mut egui::Ui, failure: &AnalysisFailure) {
        ui.colored_label(egui::Color32::from_rgb(200, 60, 60), failure.user_message());
    }

    /// Returns a status line when an export was attempted
    fn show_analysis(ui: &mut egui::Ui, state: &AppState, analysis: &Analysis) -> Option<String> {
        let indicators = &state.config.indicators;
        let summary = &analysis.summary;

        ui.colored_label(
            egui::Color32::from_rgb(40, 160, 80),
            format!("Analysis complete! Current ticker: {}", analysis.symbol),
        );
        ui.separator();

        ui.heading("Signal");
        SignalBanner::show(ui, summary.signal);
        ui.separator();

        ui.heading("Price and moving averages");
        PriceChart::show(ui, &analysis.frame, indicators);
        ui.separator();

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Last close");
                ui.heading(format_price(summary.last_close));
                ui.label(summary.signal.label());
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.label("Period high");
                ui.heading(format_price(summary.period_max));
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.label("Period low");
                ui.heading(format_price(summary.period_min));
            });
        });
        ui.label(format!(
            "{} to {} ({} sessions)",
            summary.first_date,
            summary.last_date,
            analysis.frame.rows.len()
        ));

        ui.separator();

        let mut export_status = None;
        if ui.button("Export CSV...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV Files", &["csv"])
                .set_file_name(format!("{}.csv", analysis.symbol))
                .save_file()
            {
                export_status = Some(match export_frame_csv(&analysis.frame, &path) {
                    Ok(()) => format!("Exported to {}", path.display()),
                    Err(e) => {
                        log::warn!("Export failed: {}", e);
                        format!("Export failed: {}", e)
                    }
                });
            }
        }

        ui.collapsing("Indicator table", |ui| {
            IndicatorTable::show(ui, &analysis.frame, indicators);
        });

        export_status
    }
}

/// Thousands-separated price with two decimals, e.g. `71,300.00`.
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(71300.0), "71,300.00");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(999.5), "999.50");
        assert_eq!(format_price(-1500.0), "-1,500.00");
    }
}
