//! Random star-shaped and convex polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests and benches. A draw is fully
//!   determined by its `ReplayToken`, so failing cases can be replayed.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and emit the vertices in angle order. The ring is
//!   star-shaped around the origin. `draw_convex_polygon` additionally takes the
//!   convex hull, so the fan from any vertex is a valid triangulation.
//! - `grid_step` snaps coordinates to a grid; shared vertices then compare
//!   equal exactly, which the dual builder relies on.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{Edge, Point, Polygon};
use super::util::convex_hull;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius.
    pub base_radius: f64,
    /// Center of the ring (e.g. a map position).
    pub center: Point,
    /// Snap coordinates to multiples of this step. Ignored if <= 0.
    pub grid_step: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
            grid_step: 0.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a polygon that is star-shaped around `cfg.center`, vertices in CCW angle order.
///
/// Grid snapping may merge neighbouring vertices; duplicates are removed, so the
/// result can have fewer than the sampled vertex count.
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    let mut pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            snap(cfg.center + Vector2::new(th.cos() * r, th.sin() * r), cfg.grid_step)
        })
        .collect();
    pts.dedup();
    while pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    Polygon::new(pts)
}

/// Convex hull of a star draw (CCW). `None` if the hull degenerates.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let star = draw_star_polygon(cfg, tok);
    convex_hull(&star.vertices).map(Polygon::new)
}

/// Shuffle edges and flip a random subset, reproducibly.
pub fn shuffle_edges(edges: &mut [Edge], tok: ReplayToken) {
    let mut rng = tok.to_std_rng();
    edges.shuffle(&mut rng);
    for e in edges.iter_mut() {
        if rng.gen::<bool>() {
            *e = Edge::new(e.b, e.a);
        }
    }
}

#[inline]
fn snap(p: Point, step: f64) -> Point {
    if step > 0.0 {
        p.map(|c| (c / step).round() * step)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::cross;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(cfg, tok);
        let p2 = draw_star_polygon(cfg, tok);
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 10);
    }

    #[test]
    fn convex_draw_turns_left_everywhere() {
        let tok = ReplayToken { seed: 3, index: 0 };
        let p = draw_convex_polygon(RadialCfg::default(), tok).expect("hull");
        let v = &p.vertices;
        let n = v.len();
        assert!(n >= 3);
        for k in 0..n {
            assert!(cross(v[k], v[(k + 1) % n], v[(k + 2) % n]) > 0.0);
        }
    }

    #[test]
    fn grid_snapping_lands_on_grid() {
        let cfg = RadialCfg {
            base_radius: 10.0,
            grid_step: 0.5,
            ..RadialCfg::default()
        };
        let p = draw_star_polygon(cfg, ReplayToken { seed: 9, index: 1 });
        for q in &p.vertices {
            assert_eq!((q.x / 0.5).fract(), 0.0);
            assert_eq!((q.y / 0.5).fract(), 0.0);
        }
    }

    #[test]
    fn shuffle_keeps_edge_multiset() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        let c = Vector2::new(0.0, 1.0);
        let orig = vec![Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)];
        let mut shuffled = orig.clone();
        shuffle_edges(&mut shuffled, ReplayToken { seed: 5, index: 5 });
        for e in &orig {
            assert_eq!(shuffled.iter().filter(|f| *f == e).count(), 1);
        }
    }
}
