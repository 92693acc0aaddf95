use eframe::egui;

use crate::ui::state::BoardState;

pub const DRAFT_HINT: &str = "What should the agent verify?";

/// Returns `true` when the user asked to send the draft, either with the
/// button or with Enter. Validation is left to [`BoardState::submit`].
pub fn render(ui: &mut egui::Ui, state: &mut BoardState) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let response =
            ui.add(egui::TextEdit::singleline(state.draft_mut()).hint_text(DRAFT_HINT));
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if !state.error().is_empty() {
        ui.colored_label(egui::Color32::RED, state.error());
    }

    send
}
