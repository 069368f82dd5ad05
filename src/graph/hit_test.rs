use eframe::egui::Pos2;

use super::geometry::project_onto_segment;
use super::store::{ControlPointRef, EdgeKey, GraphStore, VertexId};

/// Pick distances used when resolving a pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickConfig {
    pub vertex_radius: f32,
    pub control_point_radius: f32,
    /// Maximum distance from an edge path for a click to split it.
    pub segment_threshold: f32,
}

impl PickConfig {
    pub const VERTEX_RADIUS: f32 = 15.0;
    pub const CONTROL_POINT_RADIUS: f32 = 10.0;
    pub const SEGMENT_THRESHOLD: f32 = 7.0;
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            vertex_radius: Self::VERTEX_RADIUS,
            control_point_radius: Self::CONTROL_POINT_RADIUS,
            segment_threshold: Self::SEGMENT_THRESHOLD,
        }
    }
}

/// A click close enough to an edge path to splice a control point into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHit {
    pub edge: EdgeKey,
    /// Position in the edge's control point list for the new point.
    pub insert_index: usize,
    pub projected: Pos2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    ControlPoint(ControlPointRef),
    Vertex(VertexId),
    Segment(SegmentHit),
    Empty,
}

/// First vertex within `radius` of `point`, in id order.
///
/// This is deliberately "first", not "closest": overlapping vertices resolve to
/// the older one.
pub fn nearest_vertex(store: &GraphStore, point: Pos2, radius: f32) -> Option<VertexId> {
    let radius_sq = radius * radius;
    store
        .vertices()
        .find(|(_, position)| position.distance_sq(point) <= radius_sq)
        .map(|(id, _)| id)
}

pub fn nearest_control_point(
    store: &GraphStore,
    point: Pos2,
    radius: f32,
) -> Option<ControlPointRef> {
    let radius_sq = radius * radius;
    store.edges().iter().find_map(|edge| {
        edge.control_points
            .iter()
            .position(|control| control.distance_sq(point) <= radius_sq)
            .map(|index| ControlPointRef {
                edge: edge.key(),
                index,
            })
    })
}

pub fn nearest_edge_segment(
    store: &GraphStore,
    point: Pos2,
    threshold: f32,
) -> Option<SegmentHit> {
    for edge in store.edges() {
        let Some(path) = store.edge_path(edge) else {
            continue;
        };

        // Segment `i` runs from path[i] to path[i + 1]; path[i + 1] is control
        // point `i` (or the end vertex), so a new point goes in at index `i`.
        for (segment, pair) in path.windows(2).enumerate() {
            let projection = project_onto_segment(point, pair[0], pair[1]);
            if projection.distance <= threshold {
                return Some(SegmentHit {
                    edge: edge.key(),
                    insert_index: segment,
                    projected: projection.point,
                });
            }
        }
    }

    None
}

/// Resolves a pointer-down position: control point, then vertex, then edge
/// segment, then empty canvas.
pub fn hit_test(store: &GraphStore, point: Pos2, pick: &PickConfig) -> Hit {
    if let Some(control) = nearest_control_point(store, point, pick.control_point_radius) {
        return Hit::ControlPoint(control);
    }

    if let Some(vertex) = nearest_vertex(store, point, pick.vertex_radius) {
        return Hit::Vertex(vertex);
    }

    nearest_edge_segment(store, point, pick.segment_threshold)
        .map(Hit::Segment)
        .unwrap_or(Hit::Empty)
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    fn line_graph() -> (GraphStore, EdgeKey) {
        let mut store = GraphStore::new();
        let a = store.add_vertex(pos2(100.0, 100.0));
        let b = store.add_vertex(pos2(200.0, 100.0));
        store.add_edge(a, b);
        (store, EdgeKey::new(a, b))
    }

    // ========================================================================
    // Vertices and control points
    // ========================================================================

    #[test]
    fn vertex_pick_uses_first_match_not_closest() {
        let mut store = GraphStore::new();
        let first = store.add_vertex(pos2(0.0, 0.0));
        let second = store.add_vertex(pos2(10.0, 0.0));

        assert_eq!(nearest_vertex(&store, pos2(9.0, 0.0), 15.0), Some(first));
        assert_eq!(nearest_vertex(&store, pos2(20.0, 0.0), 15.0), Some(second));
        assert_eq!(nearest_vertex(&store, pos2(40.0, 0.0), 15.0), None);
    }

    #[test]
    fn vertex_pick_radius_is_inclusive() {
        let mut store = GraphStore::new();
        let id = store.add_vertex(pos2(0.0, 0.0));
        assert_eq!(nearest_vertex(&store, pos2(15.0, 0.0), 15.0), Some(id));
        assert_eq!(nearest_vertex(&store, pos2(15.1, 0.0), 15.0), None);
    }

    #[test]
    fn control_points_scan_edges_then_points() {
        let (mut store, key) = line_graph();
        store.push_control_point(key, pos2(130.0, 150.0));
        store.push_control_point(key, pos2(170.0, 150.0));

        assert_eq!(
            nearest_control_point(&store, pos2(168.0, 152.0), 10.0),
            Some(ControlPointRef { edge: key, index: 1 })
        );
        assert_eq!(nearest_control_point(&store, pos2(150.0, 150.0), 10.0), None);
    }

    // ========================================================================
    // Edge segments
    // ========================================================================

    #[test]
    fn straight_edge_splits_at_index_zero() {
        let (store, key) = line_graph();
        let hit = nearest_edge_segment(&store, pos2(150.0, 103.0), 7.0);
        assert_eq!(
            hit,
            Some(SegmentHit {
                edge: key,
                insert_index: 0,
                projected: pos2(150.0, 100.0),
            })
        );
    }

    #[test]
    fn segment_outside_threshold_misses() {
        let (store, _) = line_graph();
        assert_eq!(nearest_edge_segment(&store, pos2(150.0, 108.0), 7.0), None);
        // Beyond the end vertex along the line's extension.
        assert_eq!(nearest_edge_segment(&store, pos2(215.0, 100.0), 7.0), None);
    }

    #[test]
    fn bent_edge_reports_splice_index_between_segment_ends() {
        let (mut store, key) = line_graph();
        store.push_control_point(key, pos2(130.0, 50.0));
        store.push_control_point(key, pos2(170.0, 50.0));

        // Path: (100,100) -> (130,50) -> (170,50) -> (200,100)
        let middle = nearest_edge_segment(&store, pos2(150.0, 52.0), 7.0);
        assert_eq!(middle.map(|hit| hit.insert_index), Some(1));
        assert_eq!(middle.map(|hit| hit.projected), Some(pos2(150.0, 50.0)));

        let last = nearest_edge_segment(&store, pos2(185.0, 75.0), 7.0);
        assert_eq!(last.map(|hit| hit.insert_index), Some(2));
    }

    #[test]
    fn splicing_at_hit_index_keeps_path_order() {
        let (mut store, key) = line_graph();
        store.push_control_point(key, pos2(130.0, 50.0));
        store.push_control_point(key, pos2(170.0, 50.0));

        let hit = nearest_edge_segment(&store, pos2(150.0, 50.0), 7.0);
        let Some(hit) = hit else {
            panic!("expected a segment hit");
        };
        assert!(store.insert_control_point(hit.edge, hit.insert_index, hit.projected));

        let points = store.edge(key).map(|edge| edge.control_points.clone());
        assert_eq!(
            points,
            Some(vec![pos2(130.0, 50.0), pos2(150.0, 50.0), pos2(170.0, 50.0)])
        );
    }

    // ========================================================================
    // Precedence
    // ========================================================================

    #[test]
    fn control_point_wins_over_vertex() {
        let (mut store, key) = line_graph();
        store.push_control_point(key, pos2(108.0, 100.0));

        let hit = hit_test(&store, pos2(104.0, 100.0), &PickConfig::default());
        assert_eq!(hit, Hit::ControlPoint(ControlPointRef { edge: key, index: 0 }));
    }

    #[test]
    fn vertex_wins_over_segment() {
        let (store, _) = line_graph();
        let hit = hit_test(&store, pos2(110.0, 100.0), &PickConfig::default());
        assert_eq!(hit, Hit::Vertex(1));
    }

    #[test]
    fn empty_canvas_when_nothing_is_near() {
        let (store, _) = line_graph();
        let hit = hit_test(&store, pos2(150.0, 300.0), &PickConfig::default());
        assert_eq!(hit, Hit::Empty);
    }
}
