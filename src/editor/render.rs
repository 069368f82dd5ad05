use eframe::egui::Pos2;

use crate::graph::{ControlPointRef, VertexId};

use super::EditorSession;

pub const VERTEX_DRAW_RADIUS: f32 = 15.0;
pub const CONTROL_POINT_DRAW_RADIUS: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Normal,
    /// Selected element, or an edge that owns the selected control point or
    /// is collecting waypoints.
    Selected,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Segment {
        from: Pos2,
        to: Pos2,
        tint: Tint,
    },
    Vertex {
        id: VertexId,
        center: Pos2,
        radius: f32,
        tint: Tint,
    },
    ControlPoint {
        center: Pos2,
        radius: f32,
        tint: Tint,
    },
}

fn tint(selected: bool) -> Tint {
    if selected { Tint::Selected } else { Tint::Normal }
}

/// Flattens the session into paint-ordered primitives: edge segments first,
/// then vertices, then control points on top.
pub fn project(session: &EditorSession) -> Vec<Primitive> {
    let store = session.store();
    let selection = session.selection();
    let selected_control = selection.control_point();

    let mut segments = Vec::new();
    let mut controls = Vec::new();
    for edge in store.edges() {
        let Some(path) = store.edge_path(edge) else {
            continue;
        };

        let key = edge.key();
        let edge_tint = tint(
            selected_control.is_some_and(|point| point.edge == key)
                || session.active_edge() == Some(key),
        );
        segments.extend(path.windows(2).map(|pair| Primitive::Segment {
            from: pair[0],
            to: pair[1],
            tint: edge_tint,
        }));

        controls.extend(edge.control_points.iter().enumerate().map(|(index, center)| {
            Primitive::ControlPoint {
                center: *center,
                radius: CONTROL_POINT_DRAW_RADIUS,
                tint: tint(selected_control == Some(ControlPointRef { edge: key, index })),
            }
        }));
    }

    let vertices = store.vertices().map(|(id, center)| Primitive::Vertex {
        id,
        center,
        radius: VERTEX_DRAW_RADIUS,
        tint: tint(selection.contains_vertex(id)),
    });

    segments.into_iter().chain(vertices).chain(controls).collect()
}
