//! Service uptime overview with sample statuses.

use std::time::{Duration, Instant};

use egui::{Align, Color32, Layout, RichText, Ui};
use nexusboard_widgets::{status_dot, theme};

#[derive(Clone, Copy)]
enum Status {
    Up,
    Degraded,
    Down,
}

impl Status {
    fn color(self) -> Color32 {
        match self {
            Status::Up => theme::OK,
            Status::Degraded => theme::WARN,
            Status::Down => theme::ERROR,
        }
    }
}

const SERVICES: &[(&str, Status, &str)] = &[
    ("api-gateway", Status::Up, "34 ms"),
    ("vault", Status::Up, "12 ms"),
    ("git-ops", Status::Degraded, "410 ms"),
    ("registry", Status::Up, "58 ms"),
    ("dns-edge", Status::Down, "—"),
];

pub struct UptimeState {
    started: Instant,
}

impl UptimeState {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        for (name, status, latency) in SERVICES {
            ui.horizontal(|ui| {
                status_dot(ui, status.color());
                ui.label(RichText::new(*name).size(11.0));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(*latency)
                            .monospace()
                            .size(10.0)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
        }

        // Fake probe cycle: the age counter wraps every 30 seconds.
        let age = self.started.elapsed().as_secs() % 30;
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("last check {age}s ago"))
                .size(10.0)
                .color(theme::TEXT_MUTED),
        );
        ui.ctx().request_repaint_after(Duration::from_secs(1));
    }
}
