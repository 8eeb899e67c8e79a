// src/gui/components/compare_panel.rs
//
// Left list of compared players with their snapshot time. Checkbox toggles
// the overlay, click selects, × removes.

use chrono::Local;
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Compare");
    ui.separator();

    if app.compare.is_empty() {
        ui.label(egui::RichText::new("Nothing to compare yet").weak());
        return;
    }

    let mut remove: Option<String> = None;
    let mut select: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("compare_panel_scroll")
        .show(ui, |ui| {
            for entry in app.compare.iter_mut() {
                let id = &entry.player.id;
                let is_selected = app.selected.as_deref() == Some(id.as_str());
                ui.horizontal(|ui| {
                    ui.checkbox(&mut entry.shown, "");
                    if ui.selectable_label(is_selected, &entry.player.info.name).clicked() {
                        select = Some(id.clone());
                    }
                    if ui.small_button("×").on_hover_text("Remove").clicked() {
                        remove = Some(id.clone());
                    }
                });
                ui.label(egui::RichText::new(entry.player.snapshot_time(&Local)).small().weak());
            }
        });

    if let Some(id) = select {
        app.selected = Some(id);
    }
    if let Some(id) = remove {
        app.remove_compare(&id);
    }

    let Some(entry) = app
        .selected
        .as_deref()
        .and_then(|id| app.compare.iter().find(|e| e.player.id == id))
    else {
        return;
    };
    ui.separator();
    let p = &entry.player;
    ui.label(egui::RichText::new(&p.info.name).strong());
    if let Some(pos) = p.info.position {
        ui.label(pos.title());
    }
    ui.label(format!("{} stats, {} sections", p.stats.len(), p.split_indexes.len() + 1));
    ui.label(format!("Added {}", p.snapshot_time(&Local)));
}
