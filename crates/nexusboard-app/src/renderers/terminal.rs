//! Fake streaming terminal.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use egui::{RichText, Ui};
use nexusboard_widgets::theme;

const TICK: Duration = Duration::from_millis(700);
const MAX_LINES: usize = 24;

/// Canned output, replayed in a loop.
const SAMPLE_LINES: &[&str] = &[
    "$ nexus deploy --stack edge-proxy",
    "pulling image registry.local/edge-proxy:1.8.3 ...",
    "layer sha256:9f21 done",
    "layer sha256:04ac done",
    "recreating container edge-proxy-1",
    "edge-proxy-1 healthy (2.1s)",
    "$ nexus vault rotate --key ingress-tls",
    "new key version v14 sealed",
    "$ nexus net route ls",
    "10.0.4.0/24 via wg0  up",
    "10.0.9.0/24 via wg1  up",
    "$ tail -f /var/log/nexus/agent.log",
    "agent: sync ok (41 objects, 120ms)",
    "agent: drift check clean",
];

pub struct TerminalState {
    lines: VecDeque<&'static str>,
    next: usize,
    last_tick: Instant,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::from(vec![SAMPLE_LINES[0]]),
            next: 1,
            last_tick: Instant::now(),
        }
    }

    fn tick(&mut self) {
        // Skip the backlog after the widget was off-screen for a while.
        if self.last_tick.elapsed() > TICK * 20 {
            self.last_tick = Instant::now();
        }
        while self.last_tick.elapsed() >= TICK {
            self.last_tick += TICK;
            self.lines.push_back(SAMPLE_LINES[self.next % SAMPLE_LINES.len()]);
            self.next += 1;
            while self.lines.len() > MAX_LINES {
                self.lines.pop_front();
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.tick();

        let rows = (ui.available_height() / 14.0).floor().max(1.0) as usize;
        let skip = self.lines.len().saturating_sub(rows);
        for line in self.lines.iter().skip(skip) {
            let color = if line.starts_with('$') {
                theme::ACCENT
            } else {
                theme::OK
            };
            ui.label(RichText::new(*line).monospace().size(11.0).color(color));
        }

        ui.ctx().request_repaint_after(TICK);
    }
}
