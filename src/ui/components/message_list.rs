use chrono::{DateTime, Local, Utc};
use eframe::egui;

use crate::common::{Message, MessageId};

pub const EMPTY_LIST: &str = "No messages yet.";

/// Creation time in the viewer's local timezone.
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Hover / accessible text of a message's delete button.
pub fn delete_label(id: &MessageId) -> String {
    format!("Delete message {id}")
}

/// AccessKit description of the delete button: screen readers announce the
/// target message instead of the bare "Delete" caption.
pub fn delete_widget_info(id: &MessageId) -> egui::WidgetInfo {
    egui::WidgetInfo::labeled(egui::WidgetType::Button, true, delete_label(id))
}

/// Renders the list; returns the id whose Delete button was clicked.
pub fn render(ui: &mut egui::Ui, messages: &[Message]) -> Option<MessageId> {
    let mut clicked = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        if messages.is_empty() {
            ui.label(egui::RichText::new(EMPTY_LIST).weak());
            return;
        }

        for message in messages {
            ui.horizontal(|ui| {
                ui.label(&message.content);
                ui.label(egui::RichText::new(format_created_at(&message.created_at)).weak());
                let response = ui.button("Delete");
                response.widget_info(|| delete_widget_info(&message.id));
                if response.on_hover_text(delete_label(&message.id)).clicked() {
                    clicked = Some(message.id.clone());
                }
            });
        }
    });

    clicked
}
