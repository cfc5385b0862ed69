//! Fan triangulation from the first polygon vertex (the anchor).
//!
//! The fan is a valid triangulation only for polygons that are star-shaped as
//! seen from the anchor (all convex polygons qualify). Other inputs still get a
//! fan; `is_fan_valid` reports the problem but nothing rejects it.

use crate::error::GeomError;
use crate::geom2::{cross, Edge, Point};

/// Triangulator configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangulateCfg {
    /// Reject degenerate input instead of returning an empty edge set.
    pub strict_mode: bool,
}

/// Fan edges `(p[0], p[1]), (p[0], p[2]), …, (p[0], p[n-1])`: `n-1` edges, anchor first.
///
/// Fewer than three vertices yields an empty set, or `TooFewVertices` in strict mode.
/// Strict mode also rejects non-finite coordinates and vertices equal to the anchor.
pub fn triangulate(polygon: &[Point], cfg: TriangulateCfg) -> Result<Vec<Edge>, GeomError> {
    if polygon.len() < 3 {
        if cfg.strict_mode {
            return Err(GeomError::TooFewVertices { got: polygon.len() });
        }
        tracing::debug!(vertices = polygon.len(), "polygon too small, no fan");
        return Ok(Vec::new());
    }
    if cfg.strict_mode {
        check_vertices(polygon)?;
    }
    let (anchor, rest) = match polygon.split_first() {
        Some((a, rest)) => (*a, rest),
        None => return Ok(Vec::new()),
    };
    let edges: Vec<Edge> = rest.iter().map(|v| Edge::new(anchor, *v)).collect();
    tracing::debug!(vertices = polygon.len(), edges = edges.len(), "fan triangulation");
    Ok(edges)
}

/// The `n-2` fan triangles `(p[0], p[i], p[i+1])`.
pub fn fan_triangles(polygon: &[Point]) -> Vec<[Point; 3]> {
    if polygon.len() < 3 {
        return Vec::new();
    }
    let anchor = polygon[0];
    polygon[1..]
        .windows(2)
        .map(|w| [anchor, w[0], w[1]])
        .collect()
}

/// Every edge of the fan triangles, each once: the fan edges followed by the
/// boundary edges `(p[i], p[i+1])` for `1 <= i <= n-2`. `2n-3` edges in total.
///
/// This is the full edge set the dual builder needs; the bare fan has no
/// closed triangles.
pub fn fan_mesh_edges(polygon: &[Point], cfg: TriangulateCfg) -> Result<Vec<Edge>, GeomError> {
    let mut edges = triangulate(polygon, cfg)?;
    if edges.is_empty() {
        return Ok(edges);
    }
    edges.extend(polygon[1..].windows(2).map(|w| Edge::new(w[0], w[1])));
    Ok(edges)
}

/// True if all fan triangles have the same, non-zero orientation and their
/// angles at the anchor sum to less than a full turn.
///
/// Holds for convex polygons and for polygons star-shaped from the anchor. The
/// angle sum rules out rings that spiral past 360° around the anchor, whose
/// triangles all turn the same way but overlap.
pub fn is_fan_valid(polygon: &[Point]) -> bool {
    let tris = fan_triangles(polygon);
    if tris.is_empty() {
        return false;
    }
    let signs: Vec<f64> = tris.iter().map(|t| cross(t[0], t[1], t[2])).collect();
    let same_turn = signs.iter().all(|&s| s > 0.0) || signs.iter().all(|&s| s < 0.0);
    same_turn && anchor_angle(&tris) < std::f64::consts::TAU
}

/// Sum of the unsigned triangle angles at the anchor.
fn anchor_angle(tris: &[[Point; 3]]) -> f64 {
    tris.iter()
        .map(|t| {
            let u = t[1] - t[0];
            let v = t[2] - t[0];
            (u.x * v.y - u.y * v.x).abs().atan2(u.dot(&v))
        })
        .sum()
}

fn check_vertices(polygon: &[Point]) -> Result<(), GeomError> {
    if let Some(p) = polygon
        .iter()
        .find(|p| !p.iter().all(|c| c.is_finite()))
    {
        return Err(GeomError::NonFinite { point: *p });
    }
    let anchor = polygon[0];
    if polygon[1..].iter().any(|p| *p == anchor) {
        return Err(GeomError::DegenerateEdge { point: anchor });
    }
    Ok(())
}
