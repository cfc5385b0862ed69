//! Errors reported in strict mode. Legacy mode never fails.

use thiserror::Error;

use crate::geom2::{Edge, Point};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeomError {
    /// Polygon has fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },
    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at {point:?}")]
    NonFinite { point: Point },
    /// Both endpoints of an edge coincide.
    #[error("degenerate edge at {point:?}")]
    DegenerateEdge { point: Point },
    /// The same edge appears more than once.
    #[error("edge {edge:?} listed {count} times")]
    DuplicateEdge { edge: Edge, count: usize },
    /// An edge borders more than two triangles.
    #[error("edge {edge:?} borders {triangles} triangles (at most 2 allowed)")]
    NonManifoldEdge { edge: Edge, triangles: usize },
    /// An edge belongs to no triangle.
    #[error("edge {edge:?} belongs to no triangle")]
    DanglingEdge { edge: Edge },
    /// One accumulated group merged several triangles.
    #[error("group of edge {edge:?} merges {triangles} triangles")]
    AmbiguousGroup { edge: Edge, triangles: usize },
}
