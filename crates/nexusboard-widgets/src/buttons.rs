//! Button components: glyph buttons, tab toggles, catalog tiles.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Sense, Stroke, StrokeKind, Ui,
    Vec2,
};

use crate::{sizing, theme};

/// A small square button showing a single text glyph.
pub struct GlyphButton<'a> {
    glyph: &'a str,
    tooltip: &'a str,
    size: Vec2,
    tint: Color32,
}

impl<'a> GlyphButton<'a> {
    pub fn new(glyph: &'a str, tooltip: &'a str) -> Self {
        Self {
            glyph,
            tooltip,
            size: Vec2::splat(sizing::SMALL),
            tint: theme::TEXT_MUTED,
        }
    }

    /// Set the glyph color.
    pub fn tint(mut self, tint: Color32) -> Self {
        self.tint = tint;
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Vec2::splat(size);
        self
    }

    /// Show the button; returns true on click.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            if response.hovered() {
                ui.painter().rect_filled(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    theme::HOVER_BG,
                );
            }
            let tint = if response.hovered() {
                theme::TEXT
            } else {
                self.tint
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(12.0),
                tint,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_cursor(CursorIcon::PointingHand)
            .on_hover_text(self.tooltip);
        clicked
    }
}

/// A tab-style toggle button (used for page tabs).
pub struct TabButton<'a> {
    label: &'a str,
    selected: bool,
}

impl<'a> TabButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            selected: false,
        }
    }

    /// Set whether this tab is the active one.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the tab; returns true on click.
    pub fn show(self, ui: &mut Ui) -> bool {
        let galley = ui.painter().layout_no_wrap(
            self.label.to_owned(),
            FontId::proportional(13.0),
            theme::TEXT,
        );
        let size = vec2(galley.size().x + 20.0, sizing::MEDIUM);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg = if self.selected {
                theme::SELECTED_BG
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg);
            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, theme::ACCENT),
                    StrokeKind::Inside,
                );
            }
            let text_color = if self.selected {
                theme::TEXT
            } else {
                theme::TEXT_MUTED
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(13.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A catalog tile: icon, title and a one-line description.
pub struct Tile<'a> {
    icon: &'a str,
    title: &'a str,
    subtitle: &'a str,
}

impl<'a> Tile<'a> {
    pub fn new(icon: &'a str, title: &'a str, subtitle: &'a str) -> Self {
        Self {
            icon,
            title,
            subtitle,
        }
    }

    /// Show the tile; returns true on click.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(ui.available_width(), sizing::TILE_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg = if response.hovered() {
                theme::HOVER_BG
            } else {
                theme::SURFACE_BG
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );

            ui.painter().text(
                Pos2::new(rect.left() + 18.0, rect.center().y),
                Align2::CENTER_CENTER,
                self.icon,
                FontId::proportional(16.0),
                theme::ACCENT,
            );
            ui.painter().text(
                Pos2::new(rect.left() + 38.0, rect.top() + 18.0),
                Align2::LEFT_CENTER,
                self.title,
                FontId::proportional(13.0),
                theme::TEXT,
            );
            ui.painter().text(
                Pos2::new(rect.left() + 38.0, rect.top() + 36.0),
                Align2::LEFT_CENTER,
                self.subtitle,
                FontId::proportional(11.0),
                theme::TEXT_MUTED,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
