use super::panels::{LeftPanel, MainPanel};
use super::services::AnalysisRunner;
use super::state::AppState;
use crate::config::AppConfig;
use crate::data::build_provider;
use crate::engines::IndicatorPipeline;
use crate::types::{AnalysisFailure, AnalysisRequest};

pub struct StockSignalApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    runner: Option<AnalysisRunner>,
}

impl StockSignalApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            runner: None,
        }
    }

    /// Start a request for the current form values
    fn start_analysis(&mut self) {
        let state = &mut self.state;
        let lookback = state.config.analysis.clamp_lookback(state.lookback_days);
        let request = AnalysisRequest::from_input(&state.symbol_input, lookback);
        let pipeline = IndicatorPipeline::from_config(&state.config);
        let symbol = pipeline.normalize_symbol(&request.symbol);

        let provider = match build_provider(
            &state.config.provider,
            state.csv_override().map(|p| p.as_path()),
        ) {
            Ok(provider) => provider,
            Err(e) => {
                log::warn!("Could not create data provider: {}", e);
                state.result = Some(Err(AnalysisFailure::fetch_error(symbol, e)));
                return;
            }
        };

        let today = chrono::Local::now().date_naive();
        match AnalysisRunner::start(pipeline, provider, request, today) {
            Ok(runner) => {
                state.is_running = true;
                state.running_symbol = runner.symbol().to_string();
                state.status_message = format!("Analysing {}...", runner.symbol());
                self.runner = Some(runner);
            }
            Err(e) => {
                log::error!("Failed to spawn analysis thread: {}", e);
                state.result = Some(Err(AnalysisFailure::fetch_error(symbol, e)));
            }
        }
    }

    fn poll_runner(&mut self) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };

        if let Some(result) = runner.try_get_result() {
            if let Err(failure) = &result {
                if let Some(cause) = &failure.cause {
                    log::warn!("{} failed ({}): {}", failure.symbol, failure.kind.label(), cause);
                }
            }
            self.state.status_message = match &result {
                Ok(analysis) => format!("Analysis complete: {}", analysis.symbol),
                Err(failure) => format!("Analysis failed: {}", failure.symbol),
            };
            self.state.result = Some(result);
            self.state.is_running = false;
            self.runner = None;
        }
    }
}

impl eframe::App for StockSignalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_runner();
        if self.state.is_running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Stock Technical Analysis & Signals");
            });
        });

        // Left Panel - Request form
        let mut run_requested = false;
        egui::SidePanel::left("left_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    run_requested = self.left_panel.show(ui, &mut self.state);
                });
            });

        // Central Panel - Results
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.main_panel.show(ui, &mut self.state);
            });
        });

        if run_requested && !self.state.is_running {
            self.start_analysis();
        }
    }
}
