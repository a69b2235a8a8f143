//! Canvas view: the active page's widgets inside the grid engine.

use egui::{Align, Align2, FontId, Id, Layout, RichText, Ui};
use nexusboard_core::{definition, LayoutEntry, Page, PageStore, RowAnchor, WidgetId};
use nexusboard_grid::{Grid, GridConfig, GridItem, Placement, ResolvedItem};
use nexusboard_widgets::{theme, GlyphButton};

use crate::renderers::RendererStates;

/// Mutation requests produced by one canvas frame.
///
/// The canvas never mutates the store itself; it reports intents and the
/// app applies them after the frame is composed. Removal and layout change
/// are independent event sources: clicking the remove button never emits a
/// layout payload.
pub enum CanvasAction {
    RemoveWidget(WidgetId),
    LayoutChanged(Vec<LayoutEntry>),
}

/// Engine descriptors for a page's widgets.
fn grid_items(page: &Page) -> Vec<GridItem> {
    page.widgets
        .iter()
        .map(|w| {
            let y = match w.geometry.y {
                RowAnchor::Auto => Placement::Auto,
                RowAnchor::Row(row) => Placement::Row(row),
            };
            GridItem::new(w.id.to_string(), w.geometry.x, y, w.geometry.w, w.geometry.h)
        })
        .collect()
}

/// Convert an engine layout payload back into store entries.
///
/// Ids that do not parse are skipped; the store additionally absorbs
/// entries for widgets that no longer exist.
fn layout_entries(items: &[ResolvedItem]) -> Vec<LayoutEntry> {
    items
        .iter()
        .filter_map(|item| {
            let id = WidgetId::parse_str(&item.id).ok()?;
            Some(LayoutEntry {
                id,
                x: item.x,
                y: item.y,
                w: item.w,
                h: item.h,
            })
        })
        .collect()
}

/// Show the active page. Returns the mutation requests for this frame.
pub fn show(
    ui: &mut Ui,
    store: &PageStore,
    config: &GridConfig,
    renderers: &mut RendererStates,
) -> Vec<CanvasAction> {
    let page = store.active_page();
    let mut actions = Vec::new();

    if page.widgets.is_empty() {
        let rect = ui.available_rect_before_wrap();
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "This page is empty — add a widget from the catalog.",
            FontId::proportional(14.0),
            theme::TEXT_MUTED,
        );
        return actions;
    }

    let items = grid_items(page);
    // Salting the engine id with the page id gives every page fresh
    // interaction state; switching pages discards in-flight drags instead
    // of reconciling them across unrelated widget sets.
    let grid_id = Id::new(("board-grid", page.id));

    egui::ScrollArea::vertical().show(ui, |ui| {
        let response =
            Grid::new(grid_id, config).show(ui, &items, |header_ui, body_ui, item_id| {
                let Ok(widget_id) = WidgetId::parse_str(item_id) else {
                    return;
                };
                let Some(widget) = page.widget(widget_id) else {
                    return;
                };
                let def = definition(widget.kind);

                header_ui.label(
                    RichText::new(format!("{}  {}", def.icon, def.label))
                        .size(12.0)
                        .color(theme::TEXT_MUTED),
                );
                header_ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if GlyphButton::new("✖", "Remove widget").show(ui) {
                        actions.push(CanvasAction::RemoveWidget(widget_id));
                    }
                });

                renderers.show(body_ui, widget);
            });

        if let Some(changed) = response.changed {
            actions.push(CanvasAction::LayoutChanged(layout_entries(&changed)));
        }
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexusboard_core::{PageStore, WidgetKind};

    #[test]
    fn test_grid_items_mirror_page_geometry() {
        let mut store = PageStore::new();
        let id = store.add_widget(WidgetKind::Terminal);
        store.apply_layout_change(&[LayoutEntry {
            id,
            x: 2,
            y: 1,
            w: 6,
            h: 3,
        }]);

        let items = grid_items(store.active_page());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id.to_string());
        assert_eq!(items[0].x, 2);
        assert_eq!(items[0].y, Placement::Row(1));
        assert_eq!((items[0].w, items[0].h), (6, 3));
    }

    #[test]
    fn test_fresh_widget_maps_to_auto_placement() {
        let mut store = PageStore::new();
        store.add_widget(WidgetKind::ResourceGauge);
        let items = grid_items(store.active_page());
        assert_eq!(items[0].y, Placement::Auto);
    }

    #[test]
    fn test_layout_entries_skip_unparsable_ids() {
        let mut store = PageStore::new();
        let id = store.add_widget(WidgetKind::Terminal);
        let resolved = vec![
            ResolvedItem {
                id: id.to_string(),
                x: 0,
                y: 2,
                w: 4,
                h: 2,
            },
            ResolvedItem {
                id: "not-a-uuid".into(),
                x: 4,
                y: 0,
                w: 4,
                h: 2,
            },
        ];

        let entries = layout_entries(&resolved);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].y, 2);
    }

    #[test]
    fn test_round_trip_through_engine_payload() {
        let mut store = PageStore::new();
        let id = store.add_widget(WidgetKind::UptimeMonitor);

        let resolved = vec![ResolvedItem {
            id: id.to_string(),
            x: 8,
            y: 4,
            w: 4,
            h: 2,
        }];
        store.apply_layout_change(&layout_entries(&resolved));

        let geometry = store.active_page().widget(id).unwrap().geometry;
        assert_eq!(geometry.x, 8);
        assert_eq!(geometry.y.row(), Some(4));
    }
}
