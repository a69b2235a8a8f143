//! Pure grid placement math. No UI types in here.

/// Vertical placement of an item handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Let the engine find a free spot below/within existing content.
    Auto,
    /// A concrete grid row.
    Row(u32),
}

impl Placement {
    /// The concrete row, if one has been assigned.
    pub fn row(&self) -> Option<u32> {
        match self {
            Placement::Auto => None,
            Placement::Row(row) => Some(*row),
        }
    }
}

/// An item descriptor handed to the engine each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    /// Caller-side key; echoed back in layout payloads.
    pub id: String,
    pub x: u32,
    pub y: Placement,
    pub w: u32,
    pub h: u32,
}

impl GridItem {
    pub fn new(id: impl Into<String>, x: u32, y: Placement, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w: w.max(1),
            h: h.max(1),
        }
    }
}

/// An item with auto-placement resolved and geometry clamped to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl ResolvedItem {
    fn overlaps(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        self.x < x + w && x < self.x + self.w && self.y < y + h && y < self.y + self.h
    }
}

/// Viewport width threshold mapped to a column count.
#[derive(Debug, Clone, Copy)]
pub struct Breakpoint {
    /// Minimum viewport width in points for this column count to apply.
    pub min_width: f32,
    pub cols: u32,
}

/// Grid engine configuration.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Width thresholds, widest first. The first entry whose `min_width`
    /// fits the viewport wins; the last entry is the floor.
    pub breakpoints: &'static [Breakpoint],
    /// Pixel height of one grid row.
    pub row_height: f32,
    /// Gap between cells, both axes.
    pub gap: f32,
    /// Height of the header strip that acts as the drag handle.
    pub handle_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS,
            row_height: 96.0,
            gap: 10.0,
            handle_height: 26.0,
        }
    }
}

/// Desktop-first breakpoint table: 12 columns down to 2 on narrow panes.
pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { min_width: 1100.0, cols: 12 },
    Breakpoint { min_width: 900.0, cols: 10 },
    Breakpoint { min_width: 650.0, cols: 6 },
    Breakpoint { min_width: 420.0, cols: 4 },
    Breakpoint { min_width: 0.0, cols: 2 },
];

impl GridConfig {
    /// Column count for a given viewport width.
    pub fn cols_for_width(&self, width: f32) -> u32 {
        self.breakpoints
            .iter()
            .find(|bp| width >= bp.min_width)
            .or_else(|| self.breakpoints.last())
            .map(|bp| bp.cols)
            .unwrap_or(1)
            .max(1)
    }
}

/// Clamp an item's geometry into an N-column grid.
///
/// Oversized widths are narrowed to the column count; x is pulled left so
/// the item stays inside the grid.
pub fn clamp_to_cols(x: u32, w: u32, cols: u32) -> (u32, u32) {
    let w = w.clamp(1, cols);
    let x = x.min(cols - w);
    (x, w)
}

/// Resolve auto-placed items and clamp everything to the column count.
///
/// Concrete items keep their position. Each auto item, in input order, takes
/// the lowest row where its column span does not overlap anything already
/// placed, so fresh widgets fill gaps in the current row before starting a
/// new one below existing content.
pub fn resolve(items: &[GridItem], cols: u32) -> Vec<ResolvedItem> {
    let mut placed: Vec<ResolvedItem> = Vec::with_capacity(items.len());
    for item in items {
        let (x, w) = clamp_to_cols(item.x, item.w, cols);
        let h = item.h.max(1);
        let y = match item.y {
            Placement::Row(y) => y,
            Placement::Auto => lowest_free_row(&placed, x, w, h),
        };
        placed.push(ResolvedItem {
            id: item.id.clone(),
            x,
            y,
            w,
            h,
        });
    }
    placed
}

/// Lowest row where a span of `w`×`h` at column `x` fits without overlap.
fn lowest_free_row(placed: &[ResolvedItem], x: u32, w: u32, h: u32) -> u32 {
    let mut y = 0;
    let ceiling = content_bottom(placed);
    while y <= ceiling {
        if !placed.iter().any(|p| p.overlaps(x, y, w, h)) {
            return y;
        }
        y += 1;
    }
    y
}

/// One past the last occupied row.
pub fn content_bottom(items: &[ResolvedItem]) -> u32 {
    items.iter().map(|i| i.y + i.h).max().unwrap_or(0)
}

/// Width of a single cell given the available width.
pub fn cell_width(available: f32, cols: u32, gap: f32) -> f32 {
    let gaps = gap * cols.saturating_sub(1) as f32;
    ((available - gaps) / cols as f32).max(1.0)
}

/// Pixel extent of a span of cells (including interior gaps).
pub fn span_px(cells: u32, cell: f32, gap: f32) -> f32 {
    cells as f32 * cell + cells.saturating_sub(1) as f32 * gap
}

/// Pixel offset of a cell index from the grid origin.
pub fn offset_px(index: u32, cell: f32, gap: f32) -> f32 {
    index as f32 * (cell + gap)
}

/// Whole-cell delta for an accumulated pixel drag distance.
pub fn cells_for_px(px: f32, cell: f32, gap: f32) -> i64 {
    (px / (cell + gap)).round() as i64
}

/// Apply a move gesture, clamped into the grid.
pub fn moved(item: &ResolvedItem, dx: i64, dy: i64, cols: u32) -> ResolvedItem {
    let max_x = cols.saturating_sub(item.w) as i64;
    let x = (item.x as i64 + dx).clamp(0, max_x) as u32;
    let y = (item.y as i64 + dy).max(0) as u32;
    ResolvedItem {
        x,
        y,
        ..item.clone()
    }
}

/// Apply a resize gesture, clamped into the grid.
pub fn resized(item: &ResolvedItem, dw: i64, dh: i64, cols: u32) -> ResolvedItem {
    let max_w = cols.saturating_sub(item.x).max(1) as i64;
    let w = (item.w as i64 + dw).clamp(1, max_w) as u32;
    let h = (item.h as i64 + dh).max(1) as u32;
    ResolvedItem {
        w,
        h,
        ..item.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto(id: &str, x: u32, w: u32, h: u32) -> GridItem {
        GridItem::new(id, x, Placement::Auto, w, h)
    }

    fn fixed(id: &str, x: u32, y: u32, w: u32, h: u32) -> GridItem {
        GridItem::new(id, x, Placement::Row(y), w, h)
    }

    #[test]
    fn test_placement_row_accessor() {
        assert_eq!(Placement::Auto.row(), None);
        assert_eq!(Placement::Row(3).row(), Some(3));
    }

    #[test]
    fn test_cols_for_width_picks_first_fitting_breakpoint() {
        let config = GridConfig::default();
        assert_eq!(config.cols_for_width(1400.0), 12);
        assert_eq!(config.cols_for_width(1000.0), 10);
        assert_eq!(config.cols_for_width(700.0), 6);
        assert_eq!(config.cols_for_width(100.0), 2);
    }

    #[test]
    fn test_auto_items_share_a_row_when_spans_fit() {
        // Three default-width widgets at x = 0, 4, 8 all land on row 0.
        let items = [auto("a", 0, 4, 2), auto("b", 4, 4, 2), auto("c", 8, 4, 2)];
        let resolved = resolve(&items, 12);
        assert!(resolved.iter().all(|i| i.y == 0));
    }

    #[test]
    fn test_auto_item_wraps_below_occupied_column() {
        let items = [
            auto("a", 0, 4, 2),
            auto("b", 4, 4, 2),
            auto("c", 8, 4, 2),
            auto("d", 0, 4, 2),
        ];
        let resolved = resolve(&items, 12);
        assert_eq!(resolved[3].x, 0);
        assert_eq!(resolved[3].y, 2);
    }

    #[test]
    fn test_auto_item_fills_gap_before_appending() {
        // Row 0 has a hole at columns 4..8.
        let items = [
            fixed("a", 0, 0, 4, 2),
            fixed("b", 8, 0, 4, 2),
            auto("c", 4, 4, 2),
        ];
        let resolved = resolve(&items, 12);
        assert_eq!(resolved[2].y, 0);
    }

    #[test]
    fn test_concrete_rows_preserved() {
        let items = [fixed("a", 2, 5, 4, 3)];
        let resolved = resolve(&items, 12);
        assert_eq!(resolved[0].y, 5);
        assert_eq!(resolved[0].x, 2);
    }

    #[test]
    fn test_oversized_item_narrowed_at_small_breakpoint() {
        let items = [fixed("a", 8, 0, 6, 2)];
        let resolved = resolve(&items, 4);
        assert_eq!(resolved[0].w, 4);
        assert_eq!(resolved[0].x, 0);
    }

    #[test]
    fn test_content_bottom() {
        let resolved = resolve(&[fixed("a", 0, 1, 2, 3), fixed("b", 4, 0, 2, 2)], 12);
        assert_eq!(content_bottom(&resolved), 4);
        assert_eq!(content_bottom(&[]), 0);
    }

    #[test]
    fn test_move_clamped_to_grid() {
        let item = ResolvedItem {
            id: "a".into(),
            x: 2,
            y: 1,
            w: 4,
            h: 2,
        };
        let left = moved(&item, -5, -5, 12);
        assert_eq!((left.x, left.y), (0, 0));
        let right = moved(&item, 20, 3, 12);
        assert_eq!((right.x, right.y), (8, 4));
    }

    #[test]
    fn test_resize_clamped_to_grid() {
        let item = ResolvedItem {
            id: "a".into(),
            x: 8,
            y: 0,
            w: 2,
            h: 2,
        };
        let grown = resized(&item, 10, 1, 12);
        assert_eq!((grown.w, grown.h), (4, 3));
        let shrunk = resized(&item, -10, -10, 12);
        assert_eq!((shrunk.w, shrunk.h), (1, 1));
    }

    #[test]
    fn test_cells_for_px_rounds_to_nearest_cell() {
        // 100px cells with a 10px gap: one cell per 110px of travel.
        assert_eq!(cells_for_px(0.0, 100.0, 10.0), 0);
        assert_eq!(cells_for_px(60.0, 100.0, 10.0), 1);
        assert_eq!(cells_for_px(-170.0, 100.0, 10.0), -2);
    }
}
