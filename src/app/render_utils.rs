use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use graph_sketch::editor::Tint;

const GRID_STEP: f32 = 56.0;

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70));

    let mut x = rect.left() + GRID_STEP;
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += GRID_STEP;
    }

    let mut y = rect.top() + GRID_STEP;
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += GRID_STEP;
    }
}

pub(super) fn vertex_color(tint: Tint) -> Color32 {
    match tint {
        Tint::Normal => Color32::from_rgb(118, 190, 230),
        Tint::Selected => Color32::from_rgb(144, 226, 144),
    }
}

pub(super) fn edge_color(tint: Tint) -> Color32 {
    match tint {
        Tint::Normal => Color32::from_rgb(150, 150, 150),
        Tint::Selected => Color32::from_rgb(232, 84, 72),
    }
}

pub(super) fn control_point_color(tint: Tint) -> Color32 {
    match tint {
        Tint::Normal => Color32::from_gray(225),
        Tint::Selected => Color32::from_rgb(245, 166, 60),
    }
}

pub(super) fn outline_stroke() -> Stroke {
    Stroke::new(2.0, Color32::from_rgba_unmultiplied(15, 15, 15, 190))
}
