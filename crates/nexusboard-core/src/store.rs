//! The page store: canonical owner of all canvas state.

use crate::geometry::{GridRect, GRID_COLUMNS};
use crate::page::{Page, PageId};
use crate::registry;
use crate::widget::{WidgetId, WidgetInstance, WidgetKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current document schema version.
pub const DOCUMENT_VERSION: u32 = 1;

/// Errors from the document round-trip.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported document version {0} (expected {DOCUMENT_VERSION})")]
    UnsupportedVersion(u32),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A concrete geometry reported by the layout engine for one widget.
///
/// Rows are always concrete here: the engine has resolved any auto
/// placement by the time a gesture completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub id: WidgetId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Owns the ordered page list and the active-page pointer.
///
/// All mutation goes through this type; the canvas and sidebar only read
/// projections of it and issue requests back. Every operation is total:
/// the anomalous cases (deleting the last page, stale widget ids) are
/// absorbed as no-ops rather than surfaced as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStore {
    /// Document schema version, checked on load.
    version: u32,
    /// All pages, in creation order.
    pages: Vec<Page>,
    /// Id of the active page. Always refers to an element of `pages`.
    active: PageId,
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PageStore {
    /// Create a store seeded with one default page.
    pub fn new() -> Self {
        let page = Page::new("Main Dashboard");
        let active = page.id;
        Self {
            version: DOCUMENT_VERSION,
            pages: vec![page],
            active,
        }
    }

    /// All pages, in creation order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Id of the active page.
    pub fn active_page_id(&self) -> PageId {
        self.active
    }

    /// The active page.
    pub fn active_page(&self) -> &Page {
        // The non-empty invariant plus the active-pointer maintenance in
        // `remove_page` guarantee a match.
        self.pages
            .iter()
            .find(|p| p.id == self.active)
            .unwrap_or(&self.pages[0])
    }

    fn active_page_mut(&mut self) -> &mut Page {
        let idx = self
            .pages
            .iter()
            .position(|p| p.id == self.active)
            .unwrap_or(0);
        &mut self.pages[idx]
    }

    /// Get a page by id.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Append a new page named from the current count and make it active.
    pub fn add_page(&mut self) -> PageId {
        let page = Page::new(format!("New Page {}", self.pages.len() + 1));
        let id = page.id;
        self.pages.push(page);
        self.active = id;
        log::debug!("added page {id}");
        id
    }

    /// Remove a page.
    ///
    /// Deleting the sole remaining page is a silent no-op. If the removed
    /// page was active, activation falls back to the first remaining page.
    pub fn remove_page(&mut self, id: PageId) {
        if self.pages.len() <= 1 {
            log::debug!("ignoring removal of the last page");
            return;
        }
        self.pages.retain(|p| p.id != id);
        if self.active == id {
            self.active = self.pages[0].id;
        }
    }

    /// Switch the active page. Unknown ids are ignored.
    pub fn set_active_page(&mut self, id: PageId) {
        if self.pages.iter().any(|p| p.id == id) {
            self.active = id;
        }
    }

    /// Apply a transformation to one page's widget list.
    ///
    /// All other pages are untouched; unknown page ids are ignored.
    pub fn update_widgets(&mut self, page_id: PageId, f: impl FnOnce(&mut Vec<WidgetInstance>)) {
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == page_id) {
            f(&mut page.widgets);
        }
    }

    /// Place a new widget of the given kind on the active page.
    ///
    /// The x column cycles left-to-right across the grid in default-width
    /// steps; the row is left to the layout engine's auto-placement.
    pub fn add_widget(&mut self, kind: WidgetKind) -> WidgetId {
        let def = registry::definition(kind);
        let page = self.active_page_mut();
        let x = (page.widgets.len() as u32 * def.default_w) % GRID_COLUMNS;
        let widget = WidgetInstance::new(kind, GridRect::auto(x, def.default_w, def.default_h));
        let id = widget.id;
        page.widgets.push(widget);
        id
    }

    /// Remove a widget from the active page. Unknown ids are ignored.
    pub fn remove_widget(&mut self, id: WidgetId) {
        self.active_page_mut().widgets.retain(|w| w.id != id);
    }

    /// Reconcile an engine layout payload into the active page.
    ///
    /// Each entry overwrites the geometry of the matching widget; widgets
    /// without an entry keep their geometry, entries without a widget are
    /// skipped. Applying the same payload twice is a no-op the second time.
    pub fn apply_layout_change(&mut self, entries: &[LayoutEntry]) {
        let page = self.active_page_mut();
        for entry in entries {
            match page.widget_mut(entry.id) {
                Some(widget) => {
                    widget.geometry = GridRect::new(entry.x, entry.y, entry.w, entry.h);
                }
                None => log::debug!("layout entry for unknown widget {}", entry.id),
            }
        }
    }

    /// Serialize the store to JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a store from JSON, checking the schema version.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let store: Self = serde_json::from_str(json)?;
        if store.version != DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion(store.version));
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(id: WidgetId, x: u32, y: u32, w: u32, h: u32) -> LayoutEntry {
        LayoutEntry { id, x, y, w, h }
    }

    #[test]
    fn test_seeded_with_one_page() {
        let store = PageStore::new();
        assert_eq!(store.pages().len(), 1);
        assert_eq!(store.active_page().name, "Main Dashboard");
        assert!(store.active_page().widgets.is_empty());
    }

    #[test]
    fn test_page_count_never_drops_below_one() {
        let mut store = PageStore::new();
        let first = store.active_page_id();

        // Removal attempts interleaved with adds; the collection must stay
        // non-empty throughout.
        store.remove_page(first);
        assert_eq!(store.pages().len(), 1);

        let second = store.add_page();
        let third = store.add_page();
        assert_eq!(store.pages().len(), 3);

        store.remove_page(second);
        store.remove_page(third);
        store.remove_page(first);
        assert_eq!(store.pages().len(), 1);
        assert_eq!(store.pages()[0].id, first);
    }

    #[test]
    fn test_remove_sole_page_is_noop() {
        let mut store = PageStore::new();
        let id = store.active_page_id();
        let name = store.active_page().name.clone();

        store.remove_page(id);

        assert_eq!(store.pages().len(), 1);
        assert_eq!(store.pages()[0].id, id);
        assert_eq!(store.pages()[0].name, name);
    }

    #[test]
    fn test_added_page_named_from_count_and_active() {
        let mut store = PageStore::new();
        let id = store.add_page();
        assert_eq!(store.active_page_id(), id);
        assert_eq!(store.active_page().name, "New Page 2");
    }

    #[test]
    fn test_new_page_starts_empty() {
        let mut store = PageStore::new();
        store.add_widget(WidgetKind::ResourceGauge);
        store.add_widget(WidgetKind::Terminal);
        store.add_widget(WidgetKind::UptimeMonitor);

        store.add_page();
        assert!(store.active_page().widgets.is_empty());
    }

    #[test]
    fn test_active_falls_back_after_removing_active() {
        let mut store = PageStore::new();
        let first = store.active_page_id();
        let second = store.add_page();

        assert_eq!(store.active_page_id(), second);
        store.remove_page(second);
        assert_eq!(store.active_page_id(), first);
    }

    #[test]
    fn test_set_active_ignores_unknown_id() {
        let mut store = PageStore::new();
        let first = store.active_page_id();
        store.set_active_page(Uuid::new_v4());
        assert_eq!(store.active_page_id(), first);
    }

    #[test]
    fn test_widget_ids_unique_within_page() {
        let mut store = PageStore::new();
        for _ in 0..16 {
            store.add_widget(WidgetKind::Terminal);
        }
        let widgets = &store.active_page().widgets;
        for (i, a) in widgets.iter().enumerate() {
            for b in &widgets[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_add_widget_packs_left_to_right() {
        let mut store = PageStore::new();
        let xs: Vec<u32> = (0..4)
            .map(|_| {
                let id = store.add_widget(WidgetKind::Terminal);
                store.active_page().widget(id).map(|w| w.geometry.x)
            })
            .map(Option::unwrap)
            .collect();
        // Default width 4 on a 12-column grid wraps after three widgets.
        assert_eq!(xs, vec![0, 4, 8, 0]);
    }

    #[test]
    fn test_fourth_widget_wraps_and_appends() {
        // Page with three widgets at x = 0, 4, 8; the fourth lands back at
        // column 0 with its row left to auto-placement.
        let mut store = PageStore::new();
        store.add_widget(WidgetKind::ResourceGauge);
        store.add_widget(WidgetKind::Terminal);
        store.add_widget(WidgetKind::UptimeMonitor);

        let id = store.add_widget(WidgetKind::SubdomainQuickAdd);
        let widget = store.active_page().widget(id).unwrap();
        assert_eq!(widget.geometry.x, 0);
        assert!(widget.geometry.y.is_auto());
    }

    #[test]
    fn test_pages_are_isolated() {
        let mut store = PageStore::new();
        let first = store.active_page_id();
        store.add_widget(WidgetKind::Terminal);

        let second = store.add_page();
        store.add_widget(WidgetKind::ResourceGauge);
        store.add_widget(WidgetKind::UptimeMonitor);

        let before: Vec<WidgetId> = store
            .page(first)
            .unwrap()
            .widgets
            .iter()
            .map(|w| w.id)
            .collect();

        // Mutate page two: page one's collection must be untouched.
        store.update_widgets(second, |widgets| widgets.clear());
        let after: Vec<WidgetId> = store
            .page(first)
            .unwrap()
            .widgets
            .iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(before, after);
        assert!(store.page(second).unwrap().widgets.is_empty());
    }

    #[test]
    fn test_remove_widget_keeps_the_other() {
        let mut store = PageStore::new();
        let first = store.add_widget(WidgetKind::Terminal);
        let second = store.add_widget(WidgetKind::ResourceGauge);

        store.remove_widget(first);

        let widgets = &store.active_page().widgets;
        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].id, second);
    }

    #[test]
    fn test_remove_unknown_widget_is_noop() {
        let mut store = PageStore::new();
        store.add_widget(WidgetKind::Terminal);
        store.remove_widget(Uuid::new_v4());
        assert_eq!(store.active_page().widgets.len(), 1);
    }

    #[test]
    fn test_layout_change_updates_only_listed_widgets() {
        let mut store = PageStore::new();
        let first = store.add_widget(WidgetKind::Terminal);
        let second = store.add_widget(WidgetKind::ResourceGauge);
        let untouched = store.active_page().widget(second).unwrap().geometry;

        store.apply_layout_change(&[entry(first, 2, 3, 6, 4)]);

        let moved = store.active_page().widget(first).unwrap().geometry;
        assert_eq!(moved, GridRect::new(2, 3, 6, 4));
        assert_eq!(
            store.active_page().widget(second).unwrap().geometry,
            untouched
        );
    }

    #[test]
    fn test_layout_change_is_idempotent() {
        let mut store = PageStore::new();
        let id = store.add_widget(WidgetKind::Terminal);
        let payload = [entry(id, 4, 2, 4, 3)];

        store.apply_layout_change(&payload);
        let once = store.active_page().widget(id).unwrap().geometry;
        store.apply_layout_change(&payload);
        let twice = store.active_page().widget(id).unwrap().geometry;

        assert_eq!(once, twice);
    }

    #[test]
    fn test_layout_change_with_unknown_id_is_noop() {
        let mut store = PageStore::new();
        let id = store.add_widget(WidgetKind::Terminal);
        let before = store.active_page().widget(id).unwrap().geometry;

        store.apply_layout_change(&[entry(Uuid::new_v4(), 1, 1, 2, 2)]);

        assert_eq!(store.active_page().widget(id).unwrap().geometry, before);
    }

    #[test]
    fn test_layout_change_clamps_degenerate_spans() {
        let mut store = PageStore::new();
        let id = store.add_widget(WidgetKind::Terminal);

        store.apply_layout_change(&[entry(id, 0, 0, 0, 0)]);

        let geometry = store.active_page().widget(id).unwrap().geometry;
        assert_eq!(geometry.w, 1);
        assert_eq!(geometry.h, 1);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = PageStore::new();
        store.add_widget(WidgetKind::UptimeMonitor);
        store.add_page();

        let json = store.to_json().unwrap();
        let restored = PageStore::from_json(&json).unwrap();

        assert_eq!(restored.pages().len(), 2);
        assert_eq!(restored.active_page_id(), store.active_page_id());
        assert_eq!(restored.pages()[0].widgets.len(), 1);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut store = PageStore::new();
        store.version = 99;
        let json = store.to_json().unwrap();
        assert!(matches!(
            PageStore::from_json(&json),
            Err(DocumentError::UnsupportedVersion(99))
        ));
    }
}
