// src/gui/components/mod.rs
pub mod compare_panel;
pub mod load_bar;
pub mod radar;
pub mod stats_table;

use eframe::egui::Color32;

use crate::chart::Rgb;

pub(crate) fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

pub(crate) fn color_alpha(rgb: Rgb, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, a)
}
