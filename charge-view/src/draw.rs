//! Shared egui painting helpers for both viewers.

use charge_core::arrow::Arrow;
use charge_core::charge::Polarity;
use glam::Vec2;

/// Red for positive charges, blue for negative, matching the usual
/// electrostatics color convention.
pub fn charge_color(polarity: Polarity) -> egui::Color32 {
    match polarity {
        Polarity::Positive => egui::Color32::RED,
        Polarity::Negative => egui::Color32::BLUE,
    }
}

/// Paints an arrow as a line segment plus a filled triangular head.
///
/// The head geometry is computed in screen space so its size stays
/// constant in pixels regardless of camera zoom.
pub fn paint_arrow(
    painter: &egui::Painter,
    start: egui::Pos2,
    end: egui::Pos2,
    head_size: f32,
    color: egui::Color32,
) {
    painter.line_segment([start, end], egui::Stroke::new(2.0, color));

    let arrow = Arrow::new(
        Vec2::new(start.x, start.y),
        Vec2::new(end.x, end.y),
        head_size,
    );
    let head: Vec<egui::Pos2> = arrow.head.iter().map(|v| egui::pos2(v.x, v.y)).collect();
    painter.add(egui::Shape::convex_polygon(head, color, egui::Stroke::NONE));
}

/// Paints a magnitude annotation in scientific notation, centered at `pos`
/// (typically an arrow tip).
pub fn magnitude_label(painter: &egui::Painter, pos: egui::Pos2, magnitude: f32, unit: &str) {
    painter.text(
        pos,
        egui::Align2::CENTER_CENTER,
        format!("{magnitude:.2e} {unit}"),
        egui::FontId::proportional(14.0),
        egui::Color32::BLACK,
    );
}

/// Helper to draw a labeled `f32` [`egui::DragValue`].
pub fn labeled_drag_f32(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed));
    });
}
