use eframe::egui;

use crate::common::HealthStatus;
use crate::ui::state::BoardState;

pub const EYEBROW: &str = "Agent workflow dev sandbox";
pub const HEADING: &str = "Message board";

pub fn badge_color(health: HealthStatus) -> egui::Color32 {
    match health {
        HealthStatus::Ok => egui::Color32::GREEN,
        HealthStatus::Checking | HealthStatus::Down => egui::Color32::RED,
    }
}

pub fn render(ui: &mut egui::Ui, state: &BoardState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(EYEBROW).small().weak());
            ui.heading(HEADING);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let health = state.health();
            ui.colored_label(badge_color(health), health.as_str());
            if let Some(version) = state.backend_version() {
                ui.label(egui::RichText::new(format!("v{version}")).weak());
            }
        });
    });
}
