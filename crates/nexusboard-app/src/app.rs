//! Core application state and lifecycle.

use std::collections::HashSet;

use eframe::CreationContext;
use egui::{Color32, Context, Margin};
use nexusboard_core::{PageId, PageStore};
use nexusboard_grid::GridConfig;
use nexusboard_widgets::{theme, GlyphButton, TabButton};

use crate::canvas::{self, CanvasAction};
use crate::renderers::RendererStates;
use crate::sidebar;

/// The application: the page store plus per-widget presentation state.
pub struct NexusBoardApp {
    store: PageStore,
    grid_config: GridConfig,
    renderers: RendererStates,
}

impl NexusBoardApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        apply_style(&cc.egui_ctx);
        Self {
            store: PageStore::new(),
            grid_config: GridConfig::default(),
            renderers: RendererStates::new(),
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        #[derive(Default)]
        struct TabIntent {
            activate: Option<PageId>,
            remove: Option<PageId>,
            add: bool,
        }
        let mut intent = TabIntent::default();

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("NEXUS")
                    .strong()
                    .size(15.0)
                    .color(theme::ACCENT),
            );
            ui.add_space(16.0);

            let active = self.store.active_page_id();
            let removable = self.store.pages().len() > 1;
            for page in self.store.pages() {
                if TabButton::new(&page.name)
                    .selected(page.id == active)
                    .show(ui)
                {
                    intent.activate = Some(page.id);
                }
                if removable && GlyphButton::new("✖", "Remove page").show(ui) {
                    intent.remove = Some(page.id);
                }
                ui.add_space(2.0);
            }

            intent.add = GlyphButton::new("➕", "Add page")
                .tint(theme::ACCENT)
                .size(24.0)
                .show(ui);
        });

        if let Some(id) = intent.activate {
            self.store.set_active_page(id);
        }
        if let Some(id) = intent.remove {
            self.store.remove_page(id);
        }
        if intent.add {
            self.store.add_page();
        }
    }

    fn apply_canvas_actions(&mut self, actions: Vec<CanvasAction>) {
        for action in actions {
            match action {
                CanvasAction::RemoveWidget(id) => self.store.remove_widget(id),
                CanvasAction::LayoutChanged(entries) => self.store.apply_layout_change(&entries),
            }
        }
    }

    /// Drop presentation state for widgets that no longer exist anywhere.
    fn prune_renderers(&mut self) {
        let live: HashSet<_> = self
            .store
            .pages()
            .iter()
            .flat_map(|p| p.widgets.iter().map(|w| w.id))
            .collect();
        self.renderers.retain(&live);
    }
}

impl eframe::App for NexusBoardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar")
            .frame(nexusboard_widgets::toolbar_frame())
            .show(ctx, |ui| self.top_bar(ui));

        egui::SidePanel::left("catalog")
            .frame(
                egui::Frame::new()
                    .fill(theme::PANEL_BG)
                    .inner_margin(Margin::same(10)),
            )
            .exact_width(220.0)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(kind) = sidebar::show(ui) {
                    let id = self.store.add_widget(kind);
                    log::info!("added {kind:?} widget {id}");
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(Color32::from_rgb(8, 13, 26))
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| {
                let actions =
                    canvas::show(ui, &self.store, &self.grid_config, &mut self.renderers);
                self.apply_canvas_actions(actions);
            });

        self.prune_renderers();
    }
}

/// Dark dashboard styling for all stock egui widgets.
fn apply_style(ctx: &Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = theme::PANEL_BG;
    visuals.extreme_bg_color = theme::SURFACE_BG;
    visuals.faint_bg_color = theme::HOVER_BG;
    visuals.selection.stroke = egui::Stroke::new(1.0, theme::ACCENT);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, theme::BORDER);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, theme::TEXT_MUTED);
    visuals.override_text_color = Some(theme::TEXT);
    ctx.set_visuals(visuals);
}
