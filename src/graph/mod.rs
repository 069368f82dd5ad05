mod geometry;
mod hit_test;
mod matrix;
mod store;

pub use geometry::{SegmentProjection, distance_to_segment, project_onto_segment};
pub use hit_test::{
    Hit, PickConfig, SegmentHit, hit_test, nearest_control_point, nearest_edge_segment,
    nearest_vertex,
};
pub use matrix::{AdjacencyMatrix, json_export_path};
pub use store::{ControlPointRef, Edge, EdgeKey, GraphStore, VertexId};
