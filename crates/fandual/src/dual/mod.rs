//! Dual graph of a triangulation edge set (triangle centers and edge centers).
//!
//! Purpose
//! - Recover triangles from a bare edge list (no triangle records) by shared
//!   vertex adjacency, and emit for each recovered group the segments from its
//!   center to the center of each of its edges.
//!
//! Reconstruction
//! - Edges are taken one at a time from a frozen, canonically ordered snapshot.
//!   The taken edge `(a, b)` leaves the remaining set; edges at `a` and edges
//!   at `b` are collected from what remains; every edge at `b` whose vertex is
//!   touched by an edge at `a` closes a triangle.
//! - `Grouping::Accumulate` keeps everything found around a taken edge in one
//!   group. Around an interior edge taken first this merges two triangles into
//!   one landmark; `Grouping::PerTriangle` splits them.
//!
//! Limitations
//! - Point equality is exact; near-duplicate vertices split the adjacency.
//! - Non-manifold input (an edge in three or more triangles) is reconstructed
//!   without disambiguation unless `strict_mode` rejects it up front.

mod build;
mod types;
mod validate;

pub use build::{build_dual, build_dual_segments};
pub use types::{DualCfg, DualGraph, DualGroup, Grouping};
pub use validate::{check_edge_set, edge_triangle_counts};
