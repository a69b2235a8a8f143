//! Immediate-mode drag/resize interaction on top of the placement math.

use crate::layout::{self, GridConfig, GridItem, ResolvedItem};
use egui::{
    pos2, vec2, Align, CornerRadius, CursorIcon, Id, Layout, Rect, Response, Sense, StrokeKind,
    Ui, UiBuilder, Vec2,
};

/// Side of the square resize grip in the bottom-right corner.
const GRIP_SIZE: f32 = 14.0;

/// Result of showing the grid for one frame.
pub struct GridResponse {
    /// The full layout, present exactly once per completed drag or resize.
    /// Rows are concrete; the caller reconciles this into its own model.
    pub changed: Option<Vec<ResolvedItem>>,
}

#[derive(Clone, Copy, PartialEq)]
enum GestureKind {
    Move,
    Resize,
}

/// In-flight drag/resize state, kept in egui memory under the grid id.
///
/// Because the id is supplied by the caller, salting it (e.g. with a page
/// id) gives each page its own gesture state; switching pages mid-drag
/// simply orphans the old state instead of reconciling it across pages.
#[derive(Clone)]
struct Gesture {
    item_id: String,
    kind: GestureKind,
    start: ResolvedItem,
    accum: Vec2,
}

impl Gesture {
    fn preview(&self, cell_w: f32, cols: u32, config: &GridConfig) -> ResolvedItem {
        let dx = layout::cells_for_px(self.accum.x, cell_w, config.gap);
        let dy = layout::cells_for_px(self.accum.y, config.row_height, config.gap);
        match self.kind {
            GestureKind::Move => layout::moved(&self.start, dx, dy, cols),
            GestureKind::Resize => layout::resized(&self.start, dx, dy, cols),
        }
    }
}

/// The grid widget. Construct per frame and call [`Grid::show`].
pub struct Grid<'a> {
    id: Id,
    config: &'a GridConfig,
}

impl<'a> Grid<'a> {
    pub fn new(id: Id, config: &'a GridConfig) -> Self {
        Self { id, config }
    }

    /// Lay out and draw the items.
    ///
    /// `cell` is called once per item with a header ui (inside the drag
    /// handle strip), a body ui, and the item's id. Header widgets are added
    /// after the drag region is registered, so buttons placed there stay
    /// clickable without starting a drag.
    pub fn show(
        self,
        ui: &mut Ui,
        items: &[GridItem],
        mut cell: impl FnMut(&mut Ui, &mut Ui, &str),
    ) -> GridResponse {
        let config = self.config;
        let available = ui.available_width();
        let cols = config.cols_for_width(available);
        let cell_w = layout::cell_width(available, cols, config.gap);
        let resolved = layout::resolve(items, cols);

        let mut gesture: Option<Gesture> = ui.data_mut(|d| d.get_temp(self.id));
        // Drop a gesture whose item vanished (removed mid-drag).
        if let Some(g) = &gesture {
            if !resolved.iter().any(|i| i.id == g.item_id) {
                gesture = None;
            }
        }

        // Display geometry: the gestured item follows its snapped preview.
        let display: Vec<ResolvedItem> = resolved
            .iter()
            .map(|item| match &gesture {
                Some(g) if g.item_id == item.id => g.preview(cell_w, cols, config),
                _ => item.clone(),
            })
            .collect();

        let rows = layout::content_bottom(&display);
        let grid_h = layout::span_px(rows.max(1), config.row_height, config.gap);
        let (grid_rect, _) =
            ui.allocate_exact_size(vec2(available, grid_h), Sense::hover());

        let mut changed = None;
        for item in &display {
            let rect = self.item_rect(grid_rect, item, cell_w);
            let widget_id = self.id.with(&item.id);
            let dragging = gesture.as_ref().is_some_and(|g| g.item_id == item.id);

            self.paint_frame(ui, rect, dragging);

            let header_rect =
                Rect::from_min_max(rect.min, pos2(rect.max.x, rect.min.y + config.handle_height));
            let body_rect = Rect::from_min_max(pos2(rect.min.x, header_rect.max.y), rect.max);

            // Register interaction regions before the header content so the
            // content widgets end up on top of the drag region.
            let drag_resp = ui
                .interact(header_rect, widget_id.with("drag"), Sense::drag())
                .on_hover_cursor(CursorIcon::Grab);
            let grip_rect = Rect::from_min_size(
                rect.max - Vec2::splat(GRIP_SIZE),
                Vec2::splat(GRIP_SIZE),
            );
            let grip_resp = ui
                .interact(grip_rect, widget_id.with("resize"), Sense::drag())
                .on_hover_cursor(CursorIcon::ResizeNwSe);

            let mut header_ui = ui.new_child(
                UiBuilder::new()
                    .max_rect(header_rect.shrink2(vec2(8.0, 2.0)))
                    .layout(Layout::left_to_right(Align::Center)),
            );
            let mut body_ui = ui.new_child(
                UiBuilder::new()
                    .max_rect(body_rect.shrink(8.0))
                    .layout(Layout::top_down(Align::Min)),
            );
            cell(&mut header_ui, &mut body_ui, &item.id);

            self.paint_grip(ui, grip_rect);

            for (resp, kind) in [(drag_resp, GestureKind::Move), (grip_resp, GestureKind::Resize)] {
                self.track_gesture(
                    &resp,
                    kind,
                    item,
                    &resolved,
                    cell_w,
                    cols,
                    &mut gesture,
                    &mut changed,
                );
            }
        }

        match &gesture {
            Some(g) => ui.data_mut(|d| d.insert_temp(self.id, g.clone())),
            None => ui.data_mut(|d| d.remove::<Gesture>(self.id)),
        }

        GridResponse { changed }
    }

    #[allow(clippy::too_many_arguments)]
    fn track_gesture(
        &self,
        resp: &Response,
        kind: GestureKind,
        item: &ResolvedItem,
        resolved: &[ResolvedItem],
        cell_w: f32,
        cols: u32,
        gesture: &mut Option<Gesture>,
        changed: &mut Option<Vec<ResolvedItem>>,
    ) {
        if resp.drag_started() {
            // `item` still equals the resolved geometry here: previews only
            // apply once a gesture exists.
            *gesture = Some(Gesture {
                item_id: item.id.clone(),
                kind,
                start: item.clone(),
                accum: Vec2::ZERO,
            });
        }
        let Some(g) = gesture else { return };
        if g.item_id != item.id || g.kind != kind {
            return;
        }
        if resp.dragged() {
            g.accum += resp.drag_delta();
        }
        if resp.drag_stopped() {
            let finished = g.preview(cell_w, cols, self.config);
            log::debug!(
                "grid gesture finished: {} -> ({}, {}) {}x{}",
                finished.id,
                finished.x,
                finished.y,
                finished.w,
                finished.h
            );
            *changed = Some(
                resolved
                    .iter()
                    .map(|i| {
                        if i.id == finished.id {
                            finished.clone()
                        } else {
                            i.clone()
                        }
                    })
                    .collect(),
            );
            *gesture = None;
        }
    }

    fn item_rect(&self, grid_rect: Rect, item: &ResolvedItem, cell_w: f32) -> Rect {
        let config = self.config;
        let min = grid_rect.min
            + vec2(
                layout::offset_px(item.x, cell_w, config.gap),
                layout::offset_px(item.y, config.row_height, config.gap),
            );
        let size = vec2(
            layout::span_px(item.w, cell_w, config.gap),
            layout::span_px(item.h, config.row_height, config.gap),
        );
        Rect::from_min_size(min, size)
    }

    fn paint_frame(&self, ui: &Ui, rect: Rect, active: bool) {
        let visuals = ui.visuals();
        let rounding = CornerRadius::same(6);
        ui.painter()
            .rect_filled(rect, rounding, visuals.extreme_bg_color);
        let header_rect = Rect::from_min_max(
            rect.min,
            pos2(rect.max.x, rect.min.y + self.config.handle_height),
        );
        ui.painter()
            .rect_filled(header_rect, rounding, visuals.faint_bg_color);
        let stroke = if active {
            visuals.selection.stroke
        } else {
            visuals.widgets.noninteractive.bg_stroke
        };
        ui.painter()
            .rect_stroke(rect, rounding, stroke, StrokeKind::Inside);
    }

    fn paint_grip(&self, ui: &Ui, grip_rect: Rect) {
        let stroke = ui.visuals().widgets.noninteractive.fg_stroke;
        let max = grip_rect.max - Vec2::splat(3.0);
        for step in [4.0, 8.0] {
            ui.painter().line_segment(
                [pos2(max.x - step, max.y), pos2(max.x, max.y - step)],
                stroke,
            );
        }
    }
}
