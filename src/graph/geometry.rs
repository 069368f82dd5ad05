use eframe::egui::Pos2;

/// Result of projecting a point onto a line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentProjection {
    /// Closest point on the segment.
    pub point: Pos2,
    /// Parameter along the segment, clamped to `0.0..=1.0`.
    pub t: f32,
    pub distance: f32,
}

/// Projects `point` onto the segment `start..end`.
///
/// The parameter is clamped, so points beyond either end project onto that
/// end rather than onto the infinite line. Degenerate segments project onto
/// `start`.
pub fn project_onto_segment(point: Pos2, start: Pos2, end: Pos2) -> SegmentProjection {
    let direction = end - start;
    let length_sq = direction.length_sq();
    if length_sq < 1e-12 {
        return SegmentProjection {
            point: start,
            t: 0.0,
            distance: point.distance(start),
        };
    }

    let t = ((point - start).dot(direction) / length_sq).clamp(0.0, 1.0);
    let projected = start + direction * t;
    SegmentProjection {
        point: projected,
        t,
        distance: point.distance(projected),
    }
}

pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    project_onto_segment(point, start, end).distance
}
