//! Strict-mode checks on an edge set before reconstruction.
//!
//! A well-formed triangulation edge set has finite, non-degenerate, distinct
//! edges, and every edge borders one triangle (boundary) or two (interior).

use crate::error::GeomError;
use crate::geom2::{canonical_order, Edge, Point};

/// Number of distinct triangles each edge borders, in input order.
///
/// A triangle on edge `(a, b)` is any vertex `c`, distinct from `a` and `b`,
/// with both `(a, c)` and `(b, c)` present in the set.
pub fn edge_triangle_counts(edges: &[Edge]) -> Vec<usize> {
    edges
        .iter()
        .map(|e| {
            let mut apexes: Vec<Point> = Vec::new();
            for f in edges {
                let Some(c) = f.other(&e.a) else {
                    continue;
                };
                if c == e.a || c == e.b || apexes.contains(&c) {
                    continue;
                }
                if edges.iter().any(|g| *g == Edge::new(e.b, c)) {
                    apexes.push(c);
                }
            }
            apexes.len()
        })
        .collect()
}

/// Reject edge sets the reconstruction cannot interpret unambiguously.
///
/// Checks run in canonical edge order, so the reported edge does not depend
/// on input order.
pub fn check_edge_set(edges: &[Edge]) -> Result<(), GeomError> {
    let sorted = canonical_order(edges);
    for e in &sorted {
        if !e.is_finite() {
            let point = if e.a.iter().all(|c| c.is_finite()) {
                e.b
            } else {
                e.a
            };
            return Err(GeomError::NonFinite { point });
        }
        if e.is_degenerate() {
            return Err(GeomError::DegenerateEdge { point: e.a });
        }
    }
    // equal edges are adjacent after canonical sorting
    let mut k = 0;
    while k < sorted.len() {
        let run = sorted[k..].iter().take_while(|f| **f == sorted[k]).count();
        if run > 1 {
            return Err(GeomError::DuplicateEdge {
                edge: sorted[k],
                count: run,
            });
        }
        k += run;
    }
    for (e, triangles) in sorted.iter().zip(edge_triangle_counts(&sorted)) {
        match triangles {
            0 => return Err(GeomError::DanglingEdge { edge: *e }),
            1 | 2 => {}
            _ => {
                return Err(GeomError::NonManifoldEdge {
                    edge: *e,
                    triangles,
                })
            }
        }
    }
    Ok(())
}
