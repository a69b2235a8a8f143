//! Static catalog of available widget types.

use crate::widget::WidgetKind;

/// Catalog entry for a widget type: display metadata plus default span.
///
/// Immutable for the process lifetime; the sidebar renders these and the
/// store consults the default span when placing a new instance.
#[derive(Debug, Clone, Copy)]
pub struct WidgetDefinition {
    pub kind: WidgetKind,
    /// Display name in the catalog and widget chrome.
    pub label: &'static str,
    /// Glyph shown next to the label.
    pub icon: &'static str,
    /// One-line catalog description.
    pub description: &'static str,
    /// Default width in grid columns.
    pub default_w: u32,
    /// Default height in grid rows.
    pub default_h: u32,
}

const TERMINAL: WidgetDefinition = WidgetDefinition {
    kind: WidgetKind::Terminal,
    label: "Terminal",
    icon: ">_",
    description: "Live shell output from the active node",
    default_w: 4,
    default_h: 2,
};

const RESOURCE_GAUGE: WidgetDefinition = WidgetDefinition {
    kind: WidgetKind::ResourceGauge,
    label: "Resources",
    icon: "📊",
    description: "CPU, memory and disk pressure",
    default_w: 4,
    default_h: 2,
};

const SUBDOMAIN_QUICK_ADD: WidgetDefinition = WidgetDefinition {
    kind: WidgetKind::SubdomainQuickAdd,
    label: "Subdomain",
    icon: "🌐",
    description: "Provision a proxy subdomain",
    default_w: 4,
    default_h: 2,
};

const UPTIME_MONITOR: WidgetDefinition = WidgetDefinition {
    kind: WidgetKind::UptimeMonitor,
    label: "Uptime",
    icon: "✔",
    description: "Service health at a glance",
    default_w: 4,
    default_h: 2,
};

/// All widget types, in sidebar order.
pub const CATALOG: &[WidgetDefinition] = &[
    TERMINAL,
    RESOURCE_GAUGE,
    SUBDOMAIN_QUICK_ADD,
    UPTIME_MONITOR,
];

/// Look up the definition for a widget kind.
pub fn definition(kind: WidgetKind) -> &'static WidgetDefinition {
    match kind {
        WidgetKind::Terminal => &TERMINAL,
        WidgetKind::ResourceGauge => &RESOURCE_GAUGE,
        WidgetKind::SubdomainQuickAdd => &SUBDOMAIN_QUICK_ADD,
        WidgetKind::UptimeMonitor => &UPTIME_MONITOR,
    }
}
