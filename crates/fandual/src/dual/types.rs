//! Configuration and output types for the dual builder.

use crate::geom2::{centroid, Edge, Point, Segment};

/// How reconstructed triangles are grouped per taken edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grouping {
    /// One group per taken edge holding every edge found around it. When the
    /// taken edge closes several triangles they share one center.
    #[default]
    Accumulate,
    /// One group per reconstructed triangle (taken edge + its two other sides).
    PerTriangle,
}

/// Dual builder configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DualCfg {
    /// Validate the edge set first and reject groups that merge triangles.
    pub strict_mode: bool,
    pub grouping: Grouping,
}

/// One landmark of the dual: a group of edges and the center of their centers.
#[derive(Clone, Debug, PartialEq)]
pub struct DualGroup {
    /// Edge that was taken when the group was found.
    pub primary: Edge,
    /// `primary` first, then the reconstructed sides in discovery order.
    /// May list an edge more than once in `Accumulate` mode.
    pub edges: Vec<Edge>,
    /// Midpoint of each entry of `edges`.
    pub edge_centers: Vec<Point>,
    /// Centroid of `edge_centers`.
    pub center: Point,
    /// Triangles that closed around `primary` and ended up in this group.
    pub triangles: usize,
}

impl DualGroup {
    pub(crate) fn from_edges(edges: Vec<Edge>, triangles: usize) -> Option<Self> {
        let primary = *edges.first()?;
        let edge_centers: Vec<Point> = edges.iter().map(Edge::center).collect();
        let center = centroid(&edge_centers)?;
        Some(Self {
            primary,
            edges,
            edge_centers,
            center,
            triangles,
        })
    }

    /// `(center, edge_center)` for every edge of the group.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edge_centers
            .iter()
            .map(move |ec| Segment::new(self.center, *ec))
    }

    /// True if some edge of `self` equals some edge of `other`.
    pub fn shares_edge(&self, other: &DualGroup) -> bool {
        self.edges.iter().any(|e| other.edges.contains(e))
    }
}

/// Result of a dual build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DualGraph {
    pub groups: Vec<DualGroup>,
}

impl DualGraph {
    /// Drawable segments, group by group.
    pub fn segments(&self) -> Vec<Segment> {
        self.groups.iter().flat_map(|g| g.segments()).collect()
    }

    /// Total number of triangles found.
    pub fn triangle_count(&self) -> usize {
        self.groups.iter().map(|g| g.triangles).sum()
    }

    /// Group centers, one per group.
    pub fn centers(&self) -> Vec<Point> {
        self.groups.iter().map(|g| g.center).collect()
    }

    /// Index pairs `(i, j)`, `i < j`, of groups that share an edge.
    pub fn adjacency(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (i, gi) in self.groups.iter().enumerate() {
            for (j, gj) in self.groups.iter().enumerate().skip(i + 1) {
                if gi.shares_edge(gj) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    /// Center-to-center segments for every adjacent pair.
    pub fn center_links(&self) -> Vec<Segment> {
        self.adjacency()
            .into_iter()
            .map(|(i, j)| Segment::new(self.groups[i].center, self.groups[j].center))
            .collect()
    }
}
