use crate::types::Signal;
use egui::{Color32, RichText};

pub struct SignalBanner;

impl SignalBanner {
    pub fn show(ui: &mut egui::Ui, signal: Signal) {
        let (fill, text) = Self::colors(signal);
        egui::Frame::new()
            .fill(fill)
            .corner_radius(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("Current signal: {} | {}", signal.label(), signal.commentary()))
                        .color(text)
                        .strong(),
                );
            });
    }

    fn colors(signal: Signal) -> (Color32, Color32) {
        match signal {
            Signal::StrongBuy => (Color32::from_rgb(214, 245, 221), Color32::from_rgb(20, 110, 50)),
            Signal::StrongSell => (Color32::from_rgb(250, 221, 221), Color32::from_rgb(150, 30, 30)),
            Signal::Hold => (Color32::from_rgb(219, 234, 250), Color32::from_rgb(30, 70, 140)),
        }
    }
}
