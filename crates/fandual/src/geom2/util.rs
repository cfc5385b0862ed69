use std::cmp::Ordering;

use super::types::{Edge, Point};

/// Arithmetic mean of a point set. `None` for an empty set.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Twice the signed area of triangle `(a, b, c)`; positive for counterclockwise.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

// `-0.0 + 0.0 == 0.0`, so both zeros sort together (they also compare equal).
#[inline]
fn key(v: f64) -> f64 {
    v + 0.0
}

/// Total lexicographic order on points (x first, then y).
///
/// Points that compare equal under `==` always compare `Equal` here; NaNs sort last.
#[inline]
pub fn cmp_points(p: &Point, q: &Point) -> Ordering {
    key(p.x)
        .total_cmp(&key(q.x))
        .then_with(|| key(p.y).total_cmp(&key(q.y)))
}

/// Same edge with endpoints in canonical order (`a <= b`).
#[inline]
pub fn canonical_edge(e: &Edge) -> Edge {
    if cmp_points(&e.a, &e.b) == Ordering::Greater {
        Edge::new(e.b, e.a)
    } else {
        *e
    }
}

/// Total order on canonical edges.
#[inline]
pub fn cmp_edges(e: &Edge, f: &Edge) -> Ordering {
    cmp_points(&e.a, &f.a).then_with(|| cmp_points(&e.b, &f.b))
}

/// Canonicalize every edge and sort the list; the result only depends on the
/// multiset of input edges, not their order or orientation.
pub fn canonical_order(edges: &[Edge]) -> Vec<Edge> {
    let mut out: Vec<Edge> = edges.iter().map(canonical_edge).collect();
    out.sort_by(cmp_edges);
    out
}

/// Andrew's monotone chain convex hull (counterclockwise, collinear points dropped).
/// `None` if fewer than three non-collinear points remain.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    let mut pts: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| p.iter().all(|c| c.is_finite()))
        .collect();
    pts.sort_by(cmp_points);
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}
