// src/gui/components/stats_table.rs
//
// Read-only stats grid: one row per stat, section shown alongside.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{chart::section_label, csv::format_number, gui::app::App};

const HEADERS: [&str; 4] = ["Statistic", "Per 90", "Pctl", "Section"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(report) = app.report.as_ref() else {
        return;
    };

    TableBuilder::new(ui)
        .id_salt("stats_table")
        .striped(true)
        .column(Column::initial(220.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::initial(60.0).at_least(40.0))
        .column(Column::initial(50.0).at_least(40.0))
        .column(Column::remainder().at_least(60.0))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, report.stats.len(), |mut row| {
                let ix = row.index();
                let stat = &report.stats[ix];
                let section = report.section_of(ix);
                // first row of every section after the first gets a marker
                let starts_section = ix > 0 && report.split_indexes.contains(&ix);

                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    let mut text = RichText::new(&stat.name);
                    if starts_section {
                        text = text.strong();
                    }
                    ui.label(text);
                });
                for value in [stat.per90, stat.percentile] {
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(format_number(value));
                        });
                    });
                }
                row.col(|ui| {
                    ui.label(section_label(section));
                });
            });
        });
}
