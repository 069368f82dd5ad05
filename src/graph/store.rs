use std::collections::BTreeMap;

use eframe::egui::Pos2;

use super::matrix::AdjacencyMatrix;

pub type VertexId = u32;

/// Unordered vertex pair identifying an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    low: VertexId,
    high: VertexId,
}

impl EdgeKey {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn contains(self, id: VertexId) -> bool {
        self.low == id || self.high == id
    }
}

/// Control point `index` on the edge `edge`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlPointRef {
    pub edge: EdgeKey,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub control_points: Vec<Pos2>,
}

impl Edge {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.from, self.to)
    }
}

/// Vertices and edges of the sketch.
///
/// Vertices are kept in a `BTreeMap`; ids are handed out by a counter that
/// only grows, so key order is also creation order. Edges live in a `Vec` in
/// creation order, which is the order hit-testing scans them in.
#[derive(Clone, Debug)]
pub struct GraphStore {
    vertices: BTreeMap<VertexId, Pos2>,
    edges: Vec<Edge>,
    next_id: VertexId,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: Vec::new(),
            next_id: 1,
        }
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<Pos2> {
        self.vertices.get(&id).copied()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, Pos2)> + '_ {
        self.vertices.iter().map(|(id, position)| (*id, *position))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.key() == key)
    }

    fn edge_mut(&mut self, key: EdgeKey) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|edge| edge.key() == key)
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edge(EdgeKey::new(a, b)).is_some()
    }

    pub fn add_vertex(&mut self, position: Pos2) -> VertexId {
        let id = self.next_id;
        self.next_id += 1;
        self.vertices.insert(id, position);
        tracing::debug!(id, x = position.x, y = position.y, "vertex added");
        id
    }

    pub fn move_vertex(&mut self, id: VertexId, position: Pos2) -> bool {
        let Some(slot) = self.vertices.get_mut(&id) else {
            return false;
        };
        *slot = position;
        true
    }

    /// Removes the vertex together with every edge touching it.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if self.vertices.remove(&id).is_none() {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.key().contains(id));
        tracing::debug!(id, removed_edges = before - self.edges.len(), "vertex removed");
        true
    }

    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b
            || !self.vertices.contains_key(&a)
            || !self.vertices.contains_key(&b)
            || self.has_edge(a, b)
        {
            return false;
        }

        self.edges.push(Edge {
            from: a,
            to: b,
            control_points: Vec::new(),
        });
        tracing::debug!(from = a, to = b, "edge added");
        true
    }

    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        let key = EdgeKey::new(a, b);
        let Some(index) = self.edges.iter().position(|edge| edge.key() == key) else {
            return false;
        };

        self.edges.remove(index);
        tracing::debug!(from = a, to = b, "edge removed");
        true
    }

    pub fn insert_control_point(&mut self, key: EdgeKey, index: usize, position: Pos2) -> bool {
        let Some(edge) = self.edge_mut(key) else {
            return false;
        };
        if index > edge.control_points.len() {
            return false;
        }

        edge.control_points.insert(index, position);
        true
    }

    pub fn push_control_point(&mut self, key: EdgeKey, position: Pos2) -> bool {
        let Some(edge) = self.edge_mut(key) else {
            return false;
        };

        edge.control_points.push(position);
        true
    }

    pub fn control_point(&self, point: ControlPointRef) -> Option<Pos2> {
        self.edge(point.edge)
            .and_then(|edge| edge.control_points.get(point.index).copied())
    }

    pub fn move_control_point(&mut self, key: EdgeKey, index: usize, position: Pos2) -> bool {
        let Some(slot) = self
            .edge_mut(key)
            .and_then(|edge| edge.control_points.get_mut(index))
        else {
            return false;
        };

        *slot = position;
        true
    }

    pub fn remove_control_point(&mut self, key: EdgeKey, index: usize) -> Option<Pos2> {
        let edge = self.edge_mut(key)?;
        if index >= edge.control_points.len() {
            return None;
        }

        Some(edge.control_points.remove(index))
    }

    /// Full polyline of an edge: start vertex, control points, end vertex.
    pub fn edge_path(&self, edge: &Edge) -> Option<Vec<Pos2>> {
        let start = self.vertex(edge.from)?;
        let end = self.vertex(edge.to)?;

        let mut path = Vec::with_capacity(edge.control_points.len() + 2);
        path.push(start);
        path.extend_from_slice(&edge.control_points);
        path.push(end);
        Some(path)
    }

    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let vertex_ids = self.vertices.keys().copied().collect::<Vec<_>>();
        let row_of = |id: VertexId| vertex_ids.binary_search(&id).ok();

        let mut rows = vec![vec![0u8; vertex_ids.len()]; vertex_ids.len()];
        for edge in &self.edges {
            let (Some(i), Some(j)) = (row_of(edge.from), row_of(edge.to)) else {
                continue;
            };
            rows[i][j] = 1;
            rows[j][i] = 1;
        }

        AdjacencyMatrix::new(vertex_ids, rows)
    }
}
