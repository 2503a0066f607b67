//! # Distance Queries and Edge Alignment
//!
//! A border is considered to lie on a territory's edge when enough of its
//! sampled points fall close to the territory's outline. Both the distance
//! tolerance and the required fraction are parameters; the defaults are the
//! values existing map data was authored against and must not drift.

use mapcheck_core::Point;

use crate::path::{path_perimeter, path_points};

/// Default distance, in map units, within which a point counts as on a path.
pub const DEFAULT_EDGE_TOLERANCE: f64 = 5.0;

/// Default fraction of border points that must lie on a territory's outline.
pub const DEFAULT_EDGE_MATCH_THRESHOLD: f64 = 0.8;

/// Euclidean distance.
pub fn point_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Distance from `point` to the segment `start`–`end`.
///
/// The projection of `point` onto the segment's line is clamped to the
/// segment, so the result is the distance to the nearest point of the
/// segment itself. A zero-length segment degrades to point distance.
pub fn point_to_line_distance(point: Point, start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return point_distance(point, start);
    }

    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / length_sq).clamp(0.0, 1.0);
    point_distance(point, Point::new(start.x + t * dx, start.y + t * dy))
}

/// True if `point` lies within `tolerance` of any segment of the polyline
/// `path`. A polyline with fewer than two points has no segments.
pub fn is_point_near_path(point: Point, path: &[Point], tolerance: f64) -> bool {
    path.windows(2)
        .any(|w| point_to_line_distance(point, w[0], w[1]) <= tolerance)
}

/// Fraction of `border_path`'s points that lie within `tolerance` of the
/// outline of `territory_path`. A border with no points scores `0.0`.
pub fn edge_match_ratio(border_path: &str, territory_path: &str, tolerance: f64) -> f64 {
    let border = path_points(border_path);
    if border.is_empty() {
        return 0.0;
    }

    let outline = path_perimeter(territory_path);
    let near = border
        .iter()
        .filter(|p| is_point_near_path(**p, &outline, tolerance))
        .count();

    near as f64 / border.len() as f64
}

/// True if at least `threshold` of the border's points lie on the
/// territory's outline. A border with no points is never on an edge, even
/// at a threshold of `0.0`.
pub fn is_border_on_territory_edge(
    border_path: &str,
    territory_path: &str,
    tolerance: f64,
    threshold: f64,
) -> bool {
    if path_points(border_path).is_empty() {
        return false;
    }
    edge_match_ratio(border_path, territory_path, tolerance) >= threshold
}
