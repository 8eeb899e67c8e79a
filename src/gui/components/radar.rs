// src/gui/components/radar.rs
//
// Paints `RadarData` with the egui painter: grid rings, spokes, one filled
// section per dataset, and outlines for the compared players that are shown.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, FontId, Pos2, Sense, Shape, Stroke, Vec2};

use crate::{
    chart::{Palette, RadarData},
    gui::app::App,
};

use super::{color, color_alpha};

const LABEL_MARGIN: f32 = 70.0;

/// Point on spoke `ix` of `n` at `value` on the radial scale.
fn spoke_point(center: Pos2, radius: f32, ix: usize, n: usize, value: f64, min: f64, max: f64) -> Pos2 {
    let frac = if max > min { ((value - min) / (max - min)).clamp(0.0, 1.0) } else { 0.0 };
    // spoke 0 points straight up, then clockwise
    let angle = ix as f32 / n as f32 * TAU - FRAC_PI_2;
    center + Vec2::angled(angle) * radius * frac as f32
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(radar) = app.radar.as_ref() else {
        ui.centered_and_justified(|ui| ui.label("No chart"));
        return;
    };
    let n = radar.labels.len();
    if n < 3 {
        ui.label("Not enough stats for a radar");
        return;
    }

    let side = ui.available_width().min(ui.available_height()).max(200.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = (side * 0.5 - LABEL_MARGIN).max(20.0);

    let palette = &app.palette;
    let fg = color(palette.foreground);
    let grid = Stroke::new(1.0, color_alpha(palette.foreground, 0.2));
    painter.rect_filled(rect, 4.0, color(palette.background));

    let scale = radar.scale;
    let at = |ix: usize, v: f64| spoke_point(center, radius, ix, n, v, scale.min, scale.max);

    // rings
    let mut tick = scale.min + scale.step_size;
    while scale.step_size > 0.0 && tick <= scale.max {
        let ring: Vec<Pos2> = (0..n).map(|ix| at(ix, tick)).collect();
        painter.add(Shape::closed_line(ring, grid));
        tick += scale.step_size;
    }

    // spokes + labels
    let font = FontId::proportional(11.0);
    for (ix, label) in radar.labels.iter().enumerate() {
        let tip = at(ix, scale.max);
        painter.line_segment([center, tip], grid);

        let dir = (tip - center).normalized();
        let anchor = match (dir.x, dir.y) {
            (x, _) if x > 0.3 => Align2::LEFT_CENTER,
            (x, _) if x < -0.3 => Align2::RIGHT_CENTER,
            (_, y) if y < 0.0 => Align2::CENTER_BOTTOM,
            _ => Align2::CENTER_TOP,
        };
        painter.text(tip + dir * 6.0, anchor, label, font.clone(), fg);
    }

    // sections
    for (i, dataset) in radar.datasets.iter().enumerate() {
        let rgb = palette.rgb(i);
        fill_series(&painter, center, &dataset.data, &at, color_alpha(rgb, palette.alpha));
        outline(&painter, &dataset.data, &at, Stroke::new(1.5, color(rgb)));
    }

    // compared players over the same labels
    for entry in app.compare.iter().filter(|e| e.shown) {
        let stats = &entry.player.stats;
        if stats.len() != n || stats.iter().zip(&radar.labels).any(|(s, l)| &s.name != l) {
            continue;
        }
        let values: Vec<f64> = stats.iter().map(|s| s.percentile).collect();
        let highlight = app.selected.as_deref() == Some(entry.player.id.as_str());
        let width = if highlight { 2.5 } else { 1.0 };
        outline(&painter, &values, &at, Stroke::new(width, fg));
    }

    legend(&painter, rect, radar, palette, fg);
}

/// Triangle fan between neighbouring spokes, skipping wedges that are zero at
/// both ends. Keeps every piece convex even when the series dips to the center.
fn fill_series(
    painter: &egui::Painter,
    center: Pos2,
    data: &[f64],
    at: &impl Fn(usize, f64) -> Pos2,
    fill: egui::Color32,
) {
    let n = data.len();
    for ix in 0..n {
        let next = (ix + 1) % n;
        let (a, b) = (value(data[ix]), value(data[next]));
        if a <= 0.0 && b <= 0.0 {
            continue;
        }
        painter.add(Shape::convex_polygon(vec![center, at(ix, a), at(next, b)], fill, Stroke::NONE));
    }
}

fn outline(painter: &egui::Painter, data: &[f64], at: &impl Fn(usize, f64) -> Pos2, stroke: Stroke) {
    let points: Vec<Pos2> = data.iter().enumerate().map(|(ix, &v)| at(ix, value(v))).collect();
    painter.add(Shape::closed_line(points, stroke));
}

/// NaN percentiles sit at the center.
fn value(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

fn legend(painter: &egui::Painter, rect: egui::Rect, radar: &RadarData, palette: &Palette, fg: egui::Color32) {
    let font = FontId::proportional(12.0);
    let mut pos = rect.left_top() + Vec2::new(8.0, 8.0);
    for (i, dataset) in radar.datasets.iter().enumerate() {
        let swatch = egui::Rect::from_min_size(pos, Vec2::splat(10.0));
        painter.rect_filled(swatch, 2.0, color(palette.rgb(i)));
        painter.text(pos + Vec2::new(14.0, 5.0), Align2::LEFT_CENTER, dataset.label, font.clone(), fg);
        pos.y += 16.0;
    }
}
