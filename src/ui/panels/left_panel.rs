use crate::ui::state::{AppState, DataSource};

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when "Run analysis" was clicked
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.heading("Request");
        ui.separator();

        ui.label("Ticker / code (e.g. AAPL, 005930):");
        ui.text_edit_singleline(&mut state.symbol_input);

        ui.add_space(6.0);
        let analysis = &state.config.analysis;
        ui.add(
            egui::Slider::new(
                &mut state.lookback_days,
                analysis.min_lookback_days..=analysis.max_lookback_days,
            )
            .text("days"),
        );

        ui.separator();

        ui.collapsing("Data Source", |ui| {
            Self::show_data_source(ui, state);
        });

        ui.collapsing("Indicators", |ui| {
            let indicators = &state.config.indicators;
            ui.label(format!("MA_{} / MA_{}", indicators.short_window, indicators.long_window));
            ui.label(format!("RSI period: {}", indicators.rsi_period));
            ui.label(format!(
                "Oversold < {} / Overbought > {}",
                indicators.oversold, indicators.overbought
            ));
        });

        ui.separator();

        Self::show_control_buttons(ui, state)
    }

    fn show_data_source(ui: &mut egui::Ui, state: &mut AppState) {
        ui.radio_value(&mut state.data_source, DataSource::Yahoo, "Yahoo Finance");
        ui.radio_value(&mut state.data_source, DataSource::CsvFile, "CSV file");

        if state.data_source == DataSource::CsvFile {
            ui.horizontal(|ui| {
                if ui.button("Select CSV File...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV Files", &["csv"])
                        .pick_file()
                    {
                        state.status_message = format!("Using {}", path.display());
                        state.csv_path = Some(path);
                    }
                }
            });

            match &state.csv_path {
                Some(path) => {
                    ui.label(format!(
                        "File: {}",
                        path.file_name().unwrap_or_default().to_string_lossy()
                    ));
                }
                None => {
                    ui.label("No file selected");
                }
            }
        }
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &AppState) -> bool {
        let can_run = !state.is_running
            && !state.symbol_input.trim().is_empty()
            && (state.data_source == DataSource::Yahoo || state.csv_path.is_some());

        let clicked = ui
            .add_enabled(can_run, egui::Button::new("Run analysis"))
            .clicked();

        if state.is_running {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Analysing {}...", state.running_symbol));
            });
        }

        ui.label(&state.status_message);

        clicked
    }
}
