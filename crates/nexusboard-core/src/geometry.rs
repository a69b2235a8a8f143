//! Grid-cell geometry for placed widgets.

use serde::{Deserialize, Serialize};

/// Number of grid columns at desktop width.
pub const GRID_COLUMNS: u32 = 12;

/// Vertical placement of a widget.
///
/// A freshly added widget has no concrete row yet: the layout engine places
/// it after all existing content and reports the resolved row back through
/// the layout-change path. Modeling this as a variant keeps the sentinel out
/// of the numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowAnchor {
    /// Place after all existing rows (resolved by the layout engine).
    #[default]
    Auto,
    /// A concrete grid row.
    Row(u32),
}

impl RowAnchor {
    /// The concrete row, if one has been assigned.
    pub fn row(&self) -> Option<u32> {
        match self {
            RowAnchor::Auto => None,
            RowAnchor::Row(row) => Some(*row),
        }
    }

    /// Whether this anchor is still awaiting auto-placement.
    pub fn is_auto(&self) -> bool {
        matches!(self, RowAnchor::Auto)
    }
}

/// Grid-cell placement of a widget instance.
///
/// `x` is the leftmost column, `w`/`h` are spans in cells. Spans are always
/// at least 1; constructors and reconciliation clamp rather than reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    /// Leftmost column.
    pub x: u32,
    /// Vertical anchor (auto until the engine assigns a row).
    pub y: RowAnchor,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
}

impl GridRect {
    /// Create a placement with a concrete row.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            x,
            y: RowAnchor::Row(y),
            w: w.max(1),
            h: h.max(1),
        }
    }

    /// Create a placement that appends after all existing content.
    pub fn auto(x: u32, w: u32, h: u32) -> Self {
        Self {
            x,
            y: RowAnchor::Auto,
            w: w.max(1),
            h: h.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_clamped_to_one() {
        let rect = GridRect::new(0, 0, 0, 0);
        assert_eq!(rect.w, 1);
        assert_eq!(rect.h, 1);

        let auto = GridRect::auto(4, 0, 0);
        assert_eq!(auto.w, 1);
        assert_eq!(auto.h, 1);
        assert!(auto.y.is_auto());
    }

    #[test]
    fn test_row_anchor_accessors() {
        assert_eq!(RowAnchor::Auto.row(), None);
        assert_eq!(RowAnchor::Row(3).row(), Some(3));
        assert!(!RowAnchor::Row(0).is_auto());
    }
}
