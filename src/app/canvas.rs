use eframe::egui::{
    self, Align2, Color32, FontId, Key, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2,
};

use graph_sketch::editor::{Command, InputEvent, PlacementMode, Primitive, project};
use graph_sketch::graph::{Hit, hit_test};

use super::GraphSketchApp;
use super::render_utils::{
    control_point_color, draw_background, edge_color, outline_stroke, vertex_color,
};

const KEY_BINDINGS: [(Key, Command); 3] = [
    (Key::E, Command::AddEdge),
    (Key::D, Command::Delete),
    (Key::R, Command::DeleteEdge),
];

fn to_canvas(rect: Rect, screen: Pos2) -> Pos2 {
    (screen - rect.min).to_pos2()
}

fn paint_primitive(painter: &Painter, origin: Vec2, primitive: Primitive) {
    match primitive {
        Primitive::Segment { from, to, tint } => {
            painter.line_segment([from + origin, to + origin], Stroke::new(2.0, edge_color(tint)));
        }
        Primitive::Vertex {
            id,
            center,
            radius,
            tint,
        } => {
            let center = center + origin;
            painter.circle_filled(center, radius, vertex_color(tint));
            painter.circle_stroke(center, radius, outline_stroke());
            painter.text(
                center,
                Align2::CENTER_CENTER,
                id.to_string(),
                FontId::proportional(12.0),
                Color32::from_gray(20),
            );
        }
        Primitive::ControlPoint {
            center,
            radius,
            tint,
        } => {
            painter.circle_filled(center + origin, radius, control_point_color(tint));
        }
    }
}

impl GraphSketchApp {
    /// Feeds this frame's pointer and key input to the session, then paints it.
    pub(in crate::app) fn draw_canvas(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        let (pressed, held, released, pointer, delta) = ui.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
                input.pointer.primary_released(),
                input.pointer.interact_pos(),
                input.pointer.delta(),
            )
        });

        let mut changed = false;
        if let Some(pointer) = pointer.map(|screen| to_canvas(rect, screen)) {
            if pressed && response.hovered() {
                changed |= self.session.dispatch(InputEvent::PointerDown(pointer));
            } else if held && self.session.is_dragging() && delta != Vec2::ZERO {
                changed |= self.session.dispatch(InputEvent::PointerMove(pointer));
            }
        }
        if released {
            changed |= self.session.dispatch(InputEvent::PointerUp);
        }

        if !ui.ctx().wants_keyboard_input() {
            let commands = ui.input(|input| {
                KEY_BINDINGS
                    .iter()
                    .filter(|(key, _)| input.key_pressed(*key))
                    .map(|(_, command)| *command)
                    .collect::<Vec<_>>()
            });
            for command in commands {
                changed |= self.session.dispatch(InputEvent::Command(command));
            }
        }

        if changed {
            ui.ctx().request_repaint();
        }

        if let Some(hover) = response.hover_pos() {
            let config = self.session.config();
            match hit_test(self.session.store(), to_canvas(rect, hover), &config.pick) {
                Hit::ControlPoint(_) | Hit::Vertex(_) => ui.output_mut(|output| {
                    output.cursor_icon = egui::CursorIcon::PointingHand;
                }),
                Hit::Segment(_) if config.placement == PlacementMode::InsertOnSegment => {
                    ui.output_mut(|output| {
                        output.cursor_icon = egui::CursorIcon::Crosshair;
                    });
                }
                Hit::Segment(_) | Hit::Empty => {}
            }
        }

        draw_background(&painter, rect);
        let origin = rect.min.to_vec2();
        for primitive in project(&self.session) {
            paint_primitive(&painter, origin, primitive);
        }
    }
}
