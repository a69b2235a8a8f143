//! Reusable egui components with the Nexus Board dashboard styling.
//!
//! - **Buttons**: glyph buttons, toggle tabs, catalog tiles
//! - **Layout**: section labels, separators, status dots
//! - **Menu**: toolbar frame

pub mod buttons;
pub mod layout;
pub mod menu;

pub use buttons::{GlyphButton, TabButton, Tile};
pub use layout::{section_label, separator, status_dot};
pub use menu::toolbar_frame;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small button size (close glyphs, inline actions)
    pub const SMALL: f32 = 20.0;
    /// Medium button size (toolbar buttons)
    pub const MEDIUM: f32 = 28.0;
    /// Height of catalog tiles in the sidebar
    pub const TILE_HEIGHT: f32 = 56.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets (dark dashboard palette).
pub mod theme {
    use egui::Color32;

    /// Primary text color
    pub const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(51, 65, 85);
    /// Selection/active color (cyan)
    pub const ACCENT: Color32 = Color32::from_rgb(34, 211, 238);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(30, 41, 59);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(21, 40, 56);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(15, 23, 42);
    /// Widget body background
    pub const SURFACE_BG: Color32 = Color32::from_rgb(17, 27, 46);
    /// Healthy/ok status
    pub const OK: Color32 = Color32::from_rgb(74, 222, 128);
    /// Degraded status
    pub const WARN: Color32 = Color32::from_rgb(250, 204, 21);
    /// Down/error status
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
}
