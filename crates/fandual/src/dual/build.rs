//! Group reconstruction over a frozen edge snapshot.
//!
//! Every edge is taken exactly once, in canonical order. Taking an edge removes
//! it from the `Remaining` arena; neighbour lookups only see edges that are
//! still alive, so each triangle is closed by the first of its sides to be
//! taken and never again.

use crate::error::GeomError;
use crate::geom2::{canonical_order, Edge, Point, Segment};

use super::types::{DualCfg, DualGraph, DualGroup, Grouping};
use super::validate::check_edge_set;

/// Edges still available for neighbour lookups (index arena with removal flags).
struct Remaining {
    alive: Vec<bool>,
}

impl Remaining {
    fn new(n: usize) -> Self {
        Self {
            alive: vec![true; n],
        }
    }

    #[inline]
    fn remove(&mut self, i: usize) {
        self.alive[i] = false;
    }

    /// Indices of alive edges incident to `p`, ascending.
    fn incident(&self, edges: &[Edge], p: &Point) -> Vec<usize> {
        edges
            .iter()
            .enumerate()
            .filter(|(i, e)| self.alive[*i] && e.has_vertex(p))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Edges found for one `(edge at b, vertex v)` pair: every alive edge at `a`
/// that touches `v`, closing a triangle `a, b, v` with `side_b`.
struct Closure {
    side_b: usize,
    sides_a: Vec<usize>,
    apex: Point,
}

/// For each edge `eb` at `b` and each vertex `v` of `eb`, collect the edges at
/// `a` incident to `v`. Pairs without a match are dropped.
fn closures(edges: &[Edge], at_a: &[usize], at_b: &[usize]) -> Vec<Closure> {
    let mut out = Vec::new();
    for &jb in at_b {
        for v in edges[jb].vertices() {
            let sides_a: Vec<usize> = at_a
                .iter()
                .copied()
                .filter(|&ja| edges[ja].has_vertex(&v))
                .collect();
            if !sides_a.is_empty() {
                out.push(Closure {
                    side_b: jb,
                    sides_a,
                    apex: v,
                });
            }
        }
    }
    out
}

/// Build the dual landmarks of an edge set.
///
/// The result depends only on the multiset of input edges: order and endpoint
/// orientation of the input do not matter. Taken edges that close no triangle
/// produce no group.
pub fn build_dual(edges: &[Edge], cfg: DualCfg) -> Result<DualGraph, GeomError> {
    if cfg.strict_mode {
        check_edge_set(edges)?;
    }
    let snapshot = canonical_order(edges);
    let mut remaining = Remaining::new(snapshot.len());
    let mut groups: Vec<DualGroup> = Vec::new();

    for (i, taken) in snapshot.iter().enumerate() {
        remaining.remove(i);
        let at_a = remaining.incident(&snapshot, &taken.a);
        let at_b = remaining.incident(&snapshot, &taken.b);
        let found = closures(&snapshot, &at_a, &at_b);
        if found.is_empty() {
            continue;
        }
        match cfg.grouping {
            Grouping::Accumulate => {
                let triangles: usize = found
                    .iter()
                    .filter(|c| !taken.has_vertex(&c.apex))
                    .map(|c| c.sides_a.len())
                    .sum();
                if triangles > 1 {
                    if cfg.strict_mode {
                        return Err(GeomError::AmbiguousGroup {
                            edge: *taken,
                            triangles,
                        });
                    }
                    tracing::warn!(
                        edge = ?taken,
                        triangles,
                        "one group merges several triangles"
                    );
                }
                let mut group_edges = vec![*taken];
                for c in &found {
                    group_edges.extend(c.sides_a.iter().map(|&ja| snapshot[ja]));
                    group_edges.push(snapshot[c.side_b]);
                }
                groups.extend(DualGroup::from_edges(group_edges, triangles));
            }
            Grouping::PerTriangle => {
                for c in found.iter().filter(|c| !taken.has_vertex(&c.apex)) {
                    for &ja in &c.sides_a {
                        let tri = vec![*taken, snapshot[ja], snapshot[c.side_b]];
                        groups.extend(DualGroup::from_edges(tri, 1));
                    }
                }
            }
        }
    }

    let graph = DualGraph { groups };
    tracing::debug!(
        edges = snapshot.len(),
        groups = graph.groups.len(),
        triangles = graph.triangle_count(),
        "dual graph built"
    );
    Ok(graph)
}

/// Segments `(triangle center, edge center)` of `build_dual`, group by group.
pub fn build_dual_segments(edges: &[Edge], cfg: DualCfg) -> Result<Vec<Segment>, GeomError> {
    Ok(build_dual(edges, cfg)?.segments())
}
