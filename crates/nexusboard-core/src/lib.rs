//! Nexus Board Core Library
//!
//! Headless data model for the multi-page widget canvas: pages, placed
//! widget instances, the widget catalog, and grid-layout reconciliation.
//! No UI types live here; the application shell renders projections of
//! this state and feeds mutations back through [`PageStore`].

pub mod geometry;
pub mod page;
pub mod registry;
pub mod store;
pub mod widget;

pub use geometry::{GridRect, RowAnchor, GRID_COLUMNS};
pub use page::{Page, PageId};
pub use registry::{definition, WidgetDefinition, CATALOG};
pub use store::{DocumentError, LayoutEntry, PageStore, DOCUMENT_VERSION};
pub use widget::{WidgetId, WidgetInstance, WidgetKind};
