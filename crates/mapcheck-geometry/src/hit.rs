//! # Border Hit-Testing
//!
//! Uses each border's simplified `points` rather than its full path, so a
//! pointer query stays cheap on maps with detailed outlines.

use mapcheck_core::{Border, MapData, Point};

use crate::distance::is_point_near_path;

/// The first border, in id order, whose sample polyline passes within
/// `tolerance` of `point`. Borders without at least two samples are never hit.
pub fn border_at(map: &MapData, point: Point, tolerance: f64) -> Option<&Border> {
    map.borders
        .values()
        .find(|b| is_point_near_path(point, &b.points, tolerance))
}
