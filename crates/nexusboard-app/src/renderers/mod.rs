//! Per-type widget renderers.
//!
//! Everything in here is presentational: hardcoded sample data plus
//! fixed-duration timers that flip renderer-local state. The canonical
//! page/widget model is never touched from a renderer.

mod gauge;
mod subdomain;
mod terminal;
mod uptime;

use std::collections::{HashMap, HashSet};

use egui::Ui;
use nexusboard_core::{WidgetId, WidgetInstance, WidgetKind};

use gauge::GaugeState;
use subdomain::SubdomainState;
use terminal::TerminalState;
use uptime::UptimeState;

/// Presentation state for one widget instance.
enum RendererState {
    Terminal(TerminalState),
    ResourceGauge(GaugeState),
    SubdomainQuickAdd(SubdomainState),
    UptimeMonitor(UptimeState),
}

impl RendererState {
    fn new(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Terminal => Self::Terminal(TerminalState::new()),
            WidgetKind::ResourceGauge => Self::ResourceGauge(GaugeState::new()),
            WidgetKind::SubdomainQuickAdd => Self::SubdomainQuickAdd(SubdomainState::new()),
            WidgetKind::UptimeMonitor => Self::UptimeMonitor(UptimeState::new()),
        }
    }
}

/// Renderer state for all placed widgets, keyed by instance id.
///
/// State is created lazily on first render and pruned when the instance
/// disappears from every page.
pub struct RendererStates {
    states: HashMap<WidgetId, RendererState>,
}

impl RendererStates {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Render the body of a widget instance.
    pub fn show(&mut self, ui: &mut Ui, widget: &WidgetInstance) {
        let state = self
            .states
            .entry(widget.id)
            .or_insert_with(|| RendererState::new(widget.kind));
        match state {
            RendererState::Terminal(s) => s.show(ui),
            RendererState::ResourceGauge(s) => s.show(ui),
            RendererState::SubdomainQuickAdd(s) => s.show(ui),
            RendererState::UptimeMonitor(s) => s.show(ui),
        }
    }

    /// Drop state for widgets not in the live set.
    pub fn retain(&mut self, live: &HashSet<WidgetId>) {
        self.states.retain(|id, _| live.contains(id));
    }
}

impl Default for RendererStates {
    fn default() -> Self {
        Self::new()
    }
}
