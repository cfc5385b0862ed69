//! Fan triangulation and triangle-center dual graphs for planar polygons.
//!
//! Two independent, pure components:
//! - `triangulate`: fan from the first vertex of a polygon.
//! - `dual`: reconstruct triangles from a bare edge list and emit the segments
//!   from each triangle center to its edge centers.
//!
//! Nothing here does I/O or keeps state between calls. Coordinates are plain
//! `f64` pairs; in the map setting `x` is latitude and `y` longitude, but the
//! geometry treats them as plane coordinates.
//!
//! API Policy
//! - Prefer the `api` re-exports in callers; module paths may move.

pub mod api;
pub mod dual;
pub mod error;
pub mod geom2;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dual::{build_dual, build_dual_segments, DualCfg, DualGraph, Grouping};
    pub use crate::geom2::{Bounds2, Edge, Point, Polygon, Segment};
    pub use crate::triangulate::{fan_mesh_edges, triangulate, TriangulateCfg};
    pub use crate::GeomError;
}
