use std::time::Duration;

use eframe::egui;

use crate::session::BoardSession;

use super::components::{compose_form, header, message_list};

/// How often the UI wakes up to pick up API events while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct BoardApp {
    session: BoardSession,
}

impl BoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mut session: BoardSession) -> Self {
        session.initialize();
        Self { session }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.pump();

        egui::TopBottomPanel::top("board_header").show(ctx, |ui| {
            header::render(ui, self.session.state());
        });

        let mut send = false;
        let mut delete = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = self.session.state_mut();

            ui.heading("Post a message");
            send = compose_form::render(ui, state);

            ui.separator();
            ui.heading("Recent messages");
            delete = message_list::render(ui, state.messages());
        });

        if send {
            self.session.submit();
        }
        if let Some(id) = delete {
            self.session.delete(id);
        }

        if self.session.in_flight() > 0 {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}
