use eframe::egui::{Pos2, Vec2};

use crate::graph::{ControlPointRef, EdgeKey, GraphStore, Hit, PickConfig, VertexId, hit_test};

mod render;

pub use render::{Primitive, Tint, project};

/// What an empty-canvas click does once an edge exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementMode {
    /// Clicking near an edge splices a control point into its path.
    #[default]
    InsertOnSegment,
    /// A freshly created edge keeps collecting waypoints from empty-canvas
    /// clicks until it is deleted.
    AppendWaypoints,
}

impl PlacementMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::InsertOnSegment => "insert on segment",
            Self::AppendWaypoints => "append waypoints",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EditorConfig {
    pub pick: PickConfig,
    pub placement: PlacementMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddEdge,
    Delete,
    DeleteEdge,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(Pos2),
    /// Pointer moved while the primary button is held.
    PointerMove(Pos2),
    PointerUp,
    Command(Command),
}

/// Selected vertices (in click order) or a single control point, never both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    vertices: Vec<VertexId>,
    control_point: Option<ControlPointRef>,
}

impl Selection {
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn control_point(&self) -> Option<ControlPointRef> {
        self.control_point
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    fn toggle_vertex(&mut self, id: VertexId) {
        if let Some(index) = self.vertices.iter().position(|selected| *selected == id) {
            self.vertices.remove(index);
        } else {
            self.vertices.push(id);
        }
        self.control_point = None;
    }

    fn select_control_point(&mut self, point: ControlPointRef) {
        self.vertices.clear();
        self.control_point = Some(point);
    }

    fn selected_pair(&self) -> Option<(VertexId, VertexId)> {
        match self.vertices.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.control_point = None;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Vertex {
        id: VertexId,
        offset: Vec2,
    },
    ControlPoint {
        target: ControlPointRef,
        offset: Vec2,
    },
}

/// One editing session: the graph plus everything the pointer and keyboard
/// handlers need to remember between events.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    store: GraphStore,
    selection: Selection,
    drag: DragState,
    active_edge: Option<EdgeKey>,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn active_edge(&self) -> Option<EdgeKey> {
        self.active_edge
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    /// Applies one input event. Returns `true` when the canvas needs a redraw.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(pointer) => self.pointer_down(pointer),
            InputEvent::PointerMove(pointer) => self.pointer_move(pointer),
            InputEvent::PointerUp => {
                self.drag = DragState::Idle;
                false
            }
            InputEvent::Command(Command::AddEdge) => self.add_edge(),
            InputEvent::Command(Command::Delete) => self.delete_selected(),
            InputEvent::Command(Command::DeleteEdge) => self.delete_edge(),
        }
    }

    fn pointer_down(&mut self, pointer: Pos2) -> bool {
        match hit_test(&self.store, pointer, &self.config.pick) {
            Hit::ControlPoint(target) => {
                let Some(position) = self.store.control_point(target) else {
                    return false;
                };
                self.selection.select_control_point(target);
                self.drag = DragState::ControlPoint {
                    target,
                    offset: position - pointer,
                };
            }
            Hit::Vertex(id) => {
                self.selection.toggle_vertex(id);
                if self.selection.vertices.len() == 1
                    && let Some(position) = self.store.vertex(id)
                {
                    self.drag = DragState::Vertex {
                        id,
                        offset: position - pointer,
                    };
                }
            }
            Hit::Segment(segment) if self.config.placement == PlacementMode::InsertOnSegment => {
                self.store
                    .insert_control_point(segment.edge, segment.insert_index, segment.projected);
                self.selection.clear();
            }
            Hit::Segment(_) | Hit::Empty => {
                if let Some(edge) = self.active_edge
                    && self.store.push_control_point(edge, pointer)
                {
                    return true;
                }
                self.store.add_vertex(pointer);
                self.selection.clear();
            }
        }

        true
    }

    fn pointer_move(&mut self, pointer: Pos2) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::Vertex { id, offset } => self.store.move_vertex(id, pointer + offset),
            DragState::ControlPoint { target, offset } => {
                self.store
                    .move_control_point(target.edge, target.index, pointer + offset)
            }
        }
    }

    fn add_edge(&mut self) -> bool {
        let Some((a, b)) = self.selection.selected_pair() else {
            return false;
        };

        if self.store.add_edge(a, b) && self.config.placement == PlacementMode::AppendWaypoints {
            self.active_edge = Some(EdgeKey::new(a, b));
        }
        self.selection.clear();
        true
    }

    fn delete_selected(&mut self) -> bool {
        if !self.selection.vertices.is_empty() {
            for id in std::mem::take(&mut self.selection.vertices) {
                self.store.remove_vertex(id);
            }
            self.selection.clear();
            self.forget_removed_edges();
            return true;
        }

        self.remove_selected_control_point()
    }

    fn delete_edge(&mut self) -> bool {
        if let Some((a, b)) = self.selection.selected_pair() {
            self.store.remove_edge(a, b);
            self.selection.clear();
            self.forget_removed_edges();
            return true;
        }

        self.remove_selected_control_point()
    }

    fn remove_selected_control_point(&mut self) -> bool {
        let Some(target) = self.selection.control_point.take() else {
            return false;
        };

        self.store.remove_control_point(target.edge, target.index);
        // Indices behind the removed point shift down.
        if let DragState::ControlPoint { target: dragged, .. } = self.drag
            && dragged.edge == target.edge
        {
            self.drag = DragState::Idle;
        }
        true
    }

    fn forget_removed_edges(&mut self) {
        if let Some(edge) = self.active_edge
            && self.store.edge(edge).is_none()
        {
            self.active_edge = None;
        }

        match self.drag {
            DragState::Vertex { id, .. } if self.store.vertex(id).is_none() => {
                self.drag = DragState::Idle;
            }
            DragState::ControlPoint { target, .. } if self.store.edge(target.edge).is_none() => {
                self.drag = DragState::Idle;
            }
            _ => {}
        }
    }
}
