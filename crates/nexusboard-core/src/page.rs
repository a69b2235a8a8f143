//! Pages: named canvases owning their widget collections.

use crate::widget::{WidgetId, WidgetInstance};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a page.
pub type PageId = Uuid;

/// A named, independent canvas holding its own widget collection.
///
/// Pages are exclusively owned by the [`PageStore`](crate::store::PageStore);
/// nothing else holds a reference to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Unique page identifier.
    pub id: PageId,
    /// Display name.
    pub name: String,
    /// Widgets placed on this page.
    pub widgets: Vec<WidgetInstance>,
}

impl Page {
    /// Create an empty page.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            widgets: Vec::new(),
        }
    }

    /// Get a widget by id.
    pub fn widget(&self, id: WidgetId) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Get a mutable widget by id.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut WidgetInstance> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridRect;
    use crate::widget::WidgetKind;

    #[test]
    fn test_new_page_is_empty() {
        let page = Page::new("Main Dashboard");
        assert_eq!(page.name, "Main Dashboard");
        assert!(page.widgets.is_empty());
    }

    #[test]
    fn test_widget_lookup() {
        let mut page = Page::new("p");
        let widget = WidgetInstance::new(WidgetKind::Terminal, GridRect::auto(0, 4, 2));
        let id = widget.id;
        page.widgets.push(widget);

        assert!(page.widget(id).is_some());
        assert!(page.widget(Uuid::new_v4()).is_none());
    }
}
