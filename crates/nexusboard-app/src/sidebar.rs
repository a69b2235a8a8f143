//! Catalog sidebar: browse widget definitions, dispatch add-widget intents.

use egui::Ui;
use nexusboard_core::{WidgetKind, CATALOG};
use nexusboard_widgets::{section_label, separator, Tile};

/// Show the catalog. Returns the kind to add when a tile was clicked.
pub fn show(ui: &mut Ui) -> Option<WidgetKind> {
    let mut requested = None;

    section_label(ui, "WIDGET CATALOG");
    ui.add_space(6.0);

    for def in CATALOG {
        if Tile::new(def.icon, def.label, def.description).show(ui) {
            requested = Some(def.kind);
        }
        ui.add_space(6.0);
    }

    ui.add_space(10.0);
    separator(ui);
    section_label(ui, "Click a widget to add it to the active page.");

    requested
}
