//! Nexus Board Application
//!
//! The application shell: page tabs, catalog sidebar, and the widget
//! canvas, composed over the headless page store.

mod app;
mod canvas;
mod renderers;
mod sidebar;

pub use app::NexusBoardApp;
pub use canvas::CanvasAction;
