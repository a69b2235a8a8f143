//! Animated resource gauges (CPU / memory / disk).

use std::time::Duration;

use egui::{vec2, Align2, Color32, CornerRadius, FontId, RichText, Sense, Ui};
use nexusboard_widgets::theme;

/// Simulated load level in 0..=1 for a given time and channel phase.
///
/// Two slow sine terms around a base line; purely cosmetic, but stable for
/// a given `(t, phase)` so the bars move smoothly.
fn level(t: f64, phase: f64, base: f64) -> f64 {
    let v = base + 0.22 * (t * 0.9 + phase).sin() + 0.07 * (t * 2.3 + phase * 1.7).sin();
    v.clamp(0.02, 0.98)
}

fn bar_color(fraction: f64) -> Color32 {
    if fraction > 0.85 {
        theme::ERROR
    } else if fraction > 0.65 {
        theme::WARN
    } else {
        theme::OK
    }
}

pub struct GaugeState;

impl GaugeState {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let t = ui.input(|i| i.time);
        let channels = [
            ("CPU", 0.0, 0.45),
            ("Memory", 1.9, 0.60),
            ("Disk", 4.2, 0.30),
        ];

        for (label, phase, base) in channels {
            let fraction = level(t, phase, base);

            ui.label(RichText::new(label).size(11.0).color(theme::TEXT_MUTED));
            let (rect, _) =
                ui.allocate_exact_size(vec2(ui.available_width(), 14.0), Sense::hover());
            ui.painter()
                .rect_filled(rect, CornerRadius::same(3), theme::HOVER_BG);
            let mut fill = rect;
            fill.set_width(rect.width() * fraction as f32);
            ui.painter()
                .rect_filled(fill, CornerRadius::same(3), bar_color(fraction));
            ui.painter().text(
                rect.right_center() - vec2(6.0, 0.0),
                Align2::RIGHT_CENTER,
                format!("{:.0}%", fraction * 100.0),
                FontId::monospace(10.0),
                theme::TEXT,
            );
            ui.add_space(4.0);
        }

        ui.ctx().request_repaint_after(Duration::from_millis(150));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_stays_in_range() {
        let mut t = 0.0;
        while t < 100.0 {
            for phase in [0.0, 1.9, 4.2] {
                let v = level(t, phase, 0.6);
                assert!((0.0..=1.0).contains(&v), "level {v} out of range");
            }
            t += 0.37;
        }
    }
}
