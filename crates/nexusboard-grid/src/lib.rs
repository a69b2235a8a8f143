//! Nexus Board Grid Engine
//!
//! A small responsive column-grid for egui: items live in integer grid
//! cells, drag initiation is restricted to a header strip, resizing uses a
//! corner grip, and every completed gesture reports the full layout back to
//! the caller for reconciliation into its own model.
//!
//! The pure placement math (breakpoints, auto-placement, clamping) lives in
//! [`layout`]; [`engine`] adds the immediate-mode interaction on top.

pub mod engine;
pub mod layout;

pub use engine::{Grid, GridResponse};
pub use layout::{Breakpoint, GridConfig, GridItem, Placement, ResolvedItem};
