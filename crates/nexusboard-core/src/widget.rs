//! Widget instances placed on a page.

use crate::geometry::GridRect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placed widget.
pub type WidgetId = Uuid;

/// The closed set of widget types the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Streaming terminal view.
    Terminal,
    /// CPU / memory / disk gauges.
    ResourceGauge,
    /// Quick-add form for proxy subdomains.
    SubdomainQuickAdd,
    /// Service uptime overview.
    UptimeMonitor,
}

/// A placed, positioned occurrence of a widget type on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetInstance {
    /// Unique within the owning page.
    pub id: WidgetId,
    /// Which renderer this instance dispatches to.
    pub kind: WidgetKind,
    /// Grid-cell placement.
    pub geometry: GridRect,
}

impl WidgetInstance {
    /// Create a new instance with a fresh id.
    pub fn new(kind: WidgetKind, geometry: GridRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            geometry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids() {
        let a = WidgetInstance::new(WidgetKind::Terminal, GridRect::auto(0, 4, 2));
        let b = WidgetInstance::new(WidgetKind::Terminal, GridRect::auto(0, 4, 2));
        assert_ne!(a.id, b.id);
    }
}
