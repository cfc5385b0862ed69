//! Curated re-exports for callers (CLI, benches).
//!
//! Module layout may change; these names stay stable within a release.

// Planar primitives
pub use crate::geom2::{
    canonical_order, centroid, convex_hull, Bounds2, Edge, Point, Polygon, Segment,
};
// Random inputs
pub use crate::geom2::rand::{
    draw_convex_polygon, draw_star_polygon, shuffle_edges, RadialCfg, ReplayToken, VertexCount,
};
// Triangulator
pub use crate::triangulate::{
    fan_mesh_edges, fan_triangles, is_fan_valid, triangulate, TriangulateCfg,
};
// Dual builder
pub use crate::dual::{
    build_dual, build_dual_segments, check_edge_set, edge_triangle_counts, DualCfg, DualGraph,
    DualGroup, Grouping,
};
pub use crate::error::GeomError;
