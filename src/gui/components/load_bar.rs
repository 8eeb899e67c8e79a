// src/gui/components/load_bar.rs
//
// Path field + Load, identity line, and the buttons that emit protocol messages.

use eframe::egui::{self, RichText};

use crate::{gui::app::App, message::Message};

pub fn draw(ui: &mut egui::Ui, app: &mut App, outbox: &mut Vec<Message>) {
    ui.horizontal(|ui| {
        ui.label("Page:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.path_text)
                .hint_text("saved FBref player page (.html)")
                .desired_width(420.0),
        );
        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            app.load();
        }
    });

    ui.horizontal(|ui| {
        match app.report.as_ref() {
            Some(report) => {
                ui.label(RichText::new(&report.info.name).heading().strong());
                let position = report.info.position.map(|p| p.title()).unwrap_or("Position unknown");
                ui.label(position);
            }
            None => {
                ui.label(RichText::new("No player loaded").weak());
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let loaded = app.is_loaded();
            if ui.add_enabled(loaded, egui::Button::new("Save chart")).clicked() {
                outbox.push(Message::Download);
            }
            if ui.add_enabled(loaded, egui::Button::new("Add to compare")).clicked() {
                if let Some(msg) = app.compare_message() {
                    outbox.push(msg);
                }
            }
        });
    });

    ui.label(RichText::new(&app.status).small());
}
