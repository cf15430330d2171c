use crate::config::IndicatorConfig;
use crate::functions::indicators::SMA;
use crate::functions::traits::Indicator;
use crate::types::{IndicatorFrame, IndicatorRow};
use crate::ui::panels::main_panel::format_price;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

const CLOSE_COLOR: Color32 = Color32::from_rgb(70, 110, 200);
const MA_SHORT_COLOR: Color32 = Color32::from_rgb(230, 140, 40);
const MA_LONG_COLOR: Color32 = Color32::from_rgb(60, 170, 90);

/// Horizontal grid lines aimed for on the value axis.
const TARGET_TICKS: usize = 5;

/// Line chart of close and both moving averages.
pub struct PriceChart;

impl PriceChart {
    pub fn show(ui: &mut egui::Ui, frame: &IndicatorFrame, indicators: &IndicatorConfig) {
        let short_label = SMA::new(indicators.short_window).label();
        let long_label = SMA::new(indicators.long_window).label();

        ui.horizontal(|ui| {
            ui.colored_label(CLOSE_COLOR, "Close");
            ui.colored_label(MA_SHORT_COLOR, short_label.as_str());
            ui.colored_label(MA_LONG_COLOR, long_label.as_str());
        });

        let size = Vec2::new(ui.available_width(), 280.0);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::GRAY), egui::StrokeKind::Inside);

        let Some((min, max)) = Self::value_range(frame) else {
            return;
        };
        let plot = rect.shrink2(Vec2::new(60.0, 12.0)).translate(Vec2::new(24.0, -6.0));
        let count = frame.rows.len();

        let text_color = ui.visuals().text_color();
        let grid_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
        let font = FontId::proportional(11.0);

        for tick in nice_ticks(min, max, TARGET_TICKS) {
            let y = Self::to_screen(plot, 0, count, tick, min, max).y;
            painter.hline(plot.x_range(), y, Stroke::new(0.5, grid_color));
            painter.text(Pos2::new(plot.left() - 4.0, y), Align2::RIGHT_CENTER, format_price(tick), font.clone(), text_color);
        }

        let series: [(fn(&IndicatorRow) -> f64, Color32); 3] = [
            (|r: &IndicatorRow| r.ma_long, MA_LONG_COLOR),
            (|r: &IndicatorRow| r.ma_short, MA_SHORT_COLOR),
            (|r: &IndicatorRow| r.close, CLOSE_COLOR),
        ];
        for (value, color) in series {
            let points: Vec<Pos2> = frame
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| Self::to_screen(plot, i, count, value(row), min, max))
                .collect();
            painter.add(Shape::line(points, Stroke::new(1.5, color)));
        }

        if let (Some(first), Some(last)) = (frame.rows.first(), frame.rows.last()) {
            painter.text(plot.left_bottom() + Vec2::new(0.0, 6.0), Align2::LEFT_TOP, first.date.to_string(), font.clone(), text_color);
            painter.text(plot.right_bottom() + Vec2::new(0.0, 6.0), Align2::RIGHT_TOP, last.date.to_string(), font, text_color);
        }

        let hovered = response
            .hover_pos()
            .filter(|pos| plot.x_range().contains(pos.x))
            .and_then(|pos| hovered_index(plot.left(), plot.width(), pos.x, count));
        if let Some((index, row)) = hovered.and_then(|i| frame.rows.get(i).map(|row| (i, row))) {
            let x = Self::to_screen(plot, index, count, row.close, min, max).x;
            painter.vline(x, plot.y_range(), Stroke::new(1.0, Color32::GRAY));

            response.on_hover_ui_at_pointer(|ui| {
                ui.strong(row.date.to_string());
                ui.colored_label(CLOSE_COLOR, format!("Close: {}", format_price(row.close)));
                ui.colored_label(MA_SHORT_COLOR, format!("{}: {}", short_label, format_price(row.ma_short)));
                ui.colored_label(MA_LONG_COLOR, format!("{}: {}", long_label, format_price(row.ma_long)));
                ui.label(format!("RSI: {:.1}", row.rsi));
            });
        }
    }

    fn value_range(frame: &IndicatorFrame) -> Option<(f64, f64)> {
        let (min, max) = frame
            .rows
            .iter()
            .flat_map(|r| [r.close, r.ma_short, r.ma_long])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        if max - min < f64::EPSILON {
            return Some((min - 1.0, max + 1.0));
        }
        Some((min, max))
    }

    fn to_screen(plot: Rect, index: usize, count: usize, value: f64, min: f64, max: f64) -> Pos2 {
        let t = if count > 1 { index as f32 / (count - 1) as f32 } else { 0.5 };
        let v = ((value - min) / (max - min)) as f32;
        Pos2::new(
            plot.left() + t * plot.width(),
            plot.bottom() - v * plot.height(),
        )
    }
}

/// Round tick values (1, 2 or 5 times a power of ten) inside `[min, max]`.
fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }

    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let mut ticks = Vec::new();
    let mut tick = (min / step).ceil() * step;
    while tick <= max + step * 1e-9 {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

/// Row closest to the pointer's x position.
fn hovered_index(left: f32, width: f32, pointer_x: f32, count: usize) -> Option<usize> {
    if count == 0 || width <= 0.0 {
        return None;
    }
    if count == 1 {
        return Some(0);
    }
    let t = ((pointer_x - left) / width).clamp(0.0, 1.0);
    Some((t * (count - 1) as f32).round() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_are_round_and_inside_range() {
        let ticks = nice_ticks(52_300.0, 61_800.0, 5);
        assert_eq!(ticks, vec![54_000.0, 56_000.0, 58_000.0, 60_000.0]);
    }

    #[test]
    fn test_ticks_small_range() {
        let ticks = nice_ticks(0.95, 1.42, 5);
        assert_eq!(ticks.len(), 5);
        assert!((ticks[0] - 1.0).abs() < 1e-9);
        assert!((ticks[4] - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_ticks_empty_range() {
        assert!(nice_ticks(10.0, 10.0, 5).is_empty());
    }

    #[test]
    fn test_hovered_index_snaps_to_nearest_row() {
        assert_eq!(hovered_index(100.0, 200.0, 100.0, 11), Some(0));
        assert_eq!(hovered_index(100.0, 200.0, 300.0, 11), Some(10));
        assert_eq!(hovered_index(100.0, 200.0, 209.0, 11), Some(5));
        assert_eq!(hovered_index(100.0, 200.0, 50.0, 11), Some(0));
        assert_eq!(hovered_index(100.0, 200.0, 150.0, 0), None);
    }
}
