//! Toolbar frame.

use egui::{Frame, Margin, Stroke};

use crate::theme;

/// Create a flat frame for the top toolbar strip.
pub fn toolbar_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::symmetric(10, 6))
}
