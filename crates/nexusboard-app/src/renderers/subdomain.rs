//! Subdomain quick-add form with a simulated provisioning delay.

use std::time::{Duration, Instant};

use egui::{ProgressBar, RichText, TextEdit, Ui};
use nexusboard_widgets::{status_dot, theme};

/// Fixed duration of the fake provisioning step.
const PROVISION_TIME: Duration = Duration::from_millis(1500);

struct Pending {
    host: String,
    started: Instant,
}

pub struct SubdomainState {
    input: String,
    pending: Option<Pending>,
    added: Vec<String>,
}

impl SubdomainState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            pending: None,
            added: vec!["grafana.nexus.lan".to_owned()],
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        // Finish the simulated provisioning once its timer elapses.
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.started.elapsed() >= PROVISION_TIME)
        {
            if let Some(pending) = self.pending.take() {
                log::info!("simulated provisioning finished for {}", pending.host);
                self.added.push(pending.host);
            }
        }

        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.input)
                    .hint_text("service.nexus.lan")
                    .desired_width(ui.available_width() - 52.0),
            );
            let can_add = !self.input.trim().is_empty() && self.pending.is_none();
            if ui
                .add_enabled(can_add, egui::Button::new("Add"))
                .clicked()
            {
                self.pending = Some(Pending {
                    host: self.input.trim().to_owned(),
                    started: Instant::now(),
                });
                self.input.clear();
            }
        });

        if let Some(pending) = &self.pending {
            let fraction =
                (pending.started.elapsed().as_secs_f32() / PROVISION_TIME.as_secs_f32()).min(1.0);
            ui.add_space(4.0);
            ui.add(ProgressBar::new(fraction).text(format!("provisioning {}", pending.host)));
            ui.ctx().request_repaint_after(Duration::from_millis(60));
        }

        ui.add_space(6.0);
        for host in &self.added {
            ui.horizontal(|ui| {
                status_dot(ui, theme::OK);
                ui.label(RichText::new(host).monospace().size(11.0));
            });
        }
    }
}
