//! Planar primitives for fan triangulation and dual-graph reconstruction.
//!
//! Purpose
//! - Small value types (`Point`, `Edge`, `Segment`, `Polygon`, `Bounds2`) and the
//!   helpers both components need: centroids, orientation, canonical ordering.
//!
//! Equality policy
//! - Point equality is exact (`f64 ==`). There is no snapping or epsilon merge;
//!   two logically identical points that differ by rounding noise are distinct
//!   vertices. Callers that need tolerance must snap coordinates themselves.
//!
//! Ordering
//! - `canonical_order` sorts edges by coordinates so that downstream results are
//!   a function of the edge multiset alone.

pub mod rand;
mod types;
mod util;

pub use types::{Bounds2, Edge, Point, Polygon, Segment};
pub use util::{
    canonical_edge, canonical_order, centroid, cmp_edges, cmp_points, convex_hull, cross,
};
