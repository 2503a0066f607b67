//! # mapcheck-geometry: Geometry Primitives
//!
//! Answers the geometric questions the validator asks about a map:
//!
//! - **Path parsing** (`path.rs`): the restricted SVG grammar used by map
//!   documents (absolute `M`, `L`, `Q`, `C`, `Z`). A lenient parser that never
//!   fails and a strict parser that reports malformed operands.
//!
//! - **Distance** (`distance.rs`): point/point and point/segment distance,
//!   proximity to a polyline, and the edge-alignment test deciding whether a
//!   border traces a territory's outline.
//!
//! - **Bounds** (`bounds.rs`): axis-aligned bounding boxes and overlap.
//!
//! - **Hit-testing** (`hit.rs`): locating the border under a point.
//!
//! Curves are never tessellated. Control points are treated as polyline
//! vertices, which is coarse but matches the sampling the edge-alignment
//! tolerance was tuned against.
//!
//! ## Crate Policy
//!
//! - Depends only on `mapcheck-core` internally.
//! - Pure functions over borrowed input. No I/O, no shared state.

pub mod bounds;
pub mod distance;
pub mod hit;
pub mod path;

pub use bounds::{path_bounding_box, BoundingBox};
pub use distance::{
    edge_match_ratio, is_border_on_territory_edge, is_point_near_path, point_distance,
    point_to_line_distance, DEFAULT_EDGE_MATCH_THRESHOLD, DEFAULT_EDGE_TOLERANCE,
};
pub use hit::border_at;
pub use path::{
    parse_svg_path, parse_svg_path_strict, path_perimeter, path_points, PathCommand, PathError,
    PathSegment,
};
