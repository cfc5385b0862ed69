//! Plain 2D value types shared by the triangulator and the dual builder.
//!
//! - `Point`: alias for `Vector2<f64>`; equality is exact (`==` on both coordinates).
//! - `Edge`: unordered pair of points.
//! - `Segment`: ordered pair of points (drawable output).
//! - `Polygon`: implicitly closed vertex ring, read-only for the library.
//! - `Bounds2`: axis-aligned bounding box.

use nalgebra::Vector2;

/// A point in the plane. In the map domain `x` is latitude and `y` longitude.
pub type Point = Vector2<f64>;

/// Unordered pair of points.
///
/// Two edges compare equal iff their endpoint sets match under exact point
/// equality, in either orientation. No tolerance is applied: points that differ
/// by rounding noise are distinct.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    /// True if either endpoint equals `p` exactly.
    #[inline]
    pub fn has_vertex(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }

    /// True if the two edges share at least one endpoint.
    #[inline]
    pub fn touches(&self, other: &Edge) -> bool {
        self.has_vertex(&other.a) || self.has_vertex(&other.b)
    }

    /// Endpoint opposite to `p`, if `p` is an endpoint.
    #[inline]
    pub fn other(&self, p: &Point) -> Option<Point> {
        if self.a == *p {
            Some(self.b)
        } else if self.b == *p {
            Some(self.a)
        } else {
            None
        }
    }

    /// Midpoint ("edge center").
    #[inline]
    pub fn center(&self) -> Point {
        (self.a + self.b) * 0.5
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.iter().chain(self.b.iter()).all(|c| c.is_finite())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// Directed segment `from → to`. Dual output uses `from` = triangle center and
/// `to` = edge center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Ordered vertex ring; the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex; apex of the fan triangulation.
    #[inline]
    pub fn anchor(&self) -> Option<Point> {
        self.vertices.first().copied()
    }

    /// Boundary edges `(p[i], p[i+1])`, closing with `(p[n-1], p[0])`.
    pub fn boundary(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|k| Edge::new(self.vertices[k], self.vertices[(k + 1) % n]))
            .collect()
    }
}

/// Axis-aligned bounding box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    /// Bounds of a point set; `None` for an empty set.
    pub fn of_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut it = points.into_iter();
        let first = *it.next()?;
        let mut b = Bounds2 {
            min: first,
            max: first,
        };
        for p in it {
            b.min = b.min.inf(p);
            b.max = b.max.sup(p);
        }
        Some(b)
    }

    /// Bounds of all edge endpoints.
    pub fn of_edges(edges: &[Edge]) -> Option<Self> {
        let pts: Vec<Point> = edges.iter().flat_map(|e| e.vertices()).collect();
        Self::of_points(&pts)
    }

    /// Closed containment with slack `eps` on every side.
    #[inline]
    pub fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }
}
