//! JSON shapes read and written by the CLI, and conversions to library types.

use anyhow::{Context, Result};
use fandual::api::{Edge, Point, Segment};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Read;
use std::path::Path;

/// `{lat, lng}` coordinate as stored in polygon files.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Point {
    fn from(c: LatLng) -> Self {
        Point::new(c.lat, c.lng)
    }
}

impl From<Point> for LatLng {
    fn from(p: Point) -> Self {
        LatLng { lat: p.x, lng: p.y }
    }
}

/// Input document: `{polygon: [...], triangulatedPolygon: [[a, b], ...]}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InputDoc {
    #[serde(default)]
    pub polygon: Vec<LatLng>,
    #[serde(default, rename = "triangulatedPolygon")]
    pub triangulated_polygon: Option<Vec<[LatLng; 2]>>,
}

impl InputDoc {
    pub fn polygon_points(&self) -> Vec<Point> {
        self.polygon.iter().map(|&c| c.into()).collect()
    }

    pub fn triangulated_edges(&self) -> Option<Vec<Edge>> {
        self.triangulated_polygon.as_ref().map(|lines| {
            lines
                .iter()
                .map(|[a, b]| Edge::new((*a).into(), (*b).into()))
                .collect()
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TriangulateOut {
    pub edges: Vec<[LatLng; 2]>,
    pub fan_valid: bool,
}

impl TriangulateOut {
    /// Kind and counts for the provenance sidecar.
    pub fn summary(&self) -> Value {
        json!({ "kind": "edges", "edges": self.edges.len(), "fan_valid": self.fan_valid })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct DualOut {
    pub segments: Vec<[LatLng; 2]>,
    pub triangles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<[LatLng; 2]>>,
}

impl DualOut {
    pub fn summary(&self) -> Value {
        json!({
            "kind": "segments",
            "segments": self.segments.len(),
            "triangles": self.triangles,
            "links": self.links.as_ref().map(Vec::len)
        })
    }
}

pub fn edge_pair(e: &Edge) -> [LatLng; 2] {
    [e.a.into(), e.b.into()]
}

pub fn segment_pair(s: &Segment) -> [LatLng; 2] {
    [s.from.into(), s.to.into()]
}

/// Where a document came from: path label, size, and a content fingerprint.
#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    pub path: String,
    pub bytes: usize,
    pub fingerprint: String,
}

impl Source {
    pub fn to_json(&self) -> Value {
        json!({ "path": self.path, "bytes": self.bytes, "fingerprint": self.fingerprint })
    }
}

/// Parse raw document text; `path` only labels errors and the `Source`.
pub fn parse_input(path: &str, raw: &str) -> Result<(InputDoc, Source)> {
    let doc: InputDoc = serde_json::from_str(raw).with_context(|| format!("parsing {path}"))?;
    let mut hasher = DefaultHasher::new();
    raw.hash(&mut hasher);
    let source = Source {
        path: path.to_string(),
        bytes: raw.len(),
        fingerprint: format!("{:016x}", hasher.finish()),
    };
    Ok((doc, source))
}

/// Read and parse a document from a path, or from stdin when `input` is `-`.
pub fn read_input(input: &str) -> Result<(InputDoc, Source)> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(input)).with_context(|| format!("reading {input}"))?
    };
    parse_input(input, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_shape() {
        let raw = r#"{
            "polygon": [{"lat": 0, "lng": 0}, {"lat": 0, "lng": 2}, {"lat": 2, "lng": 2}],
            "triangulatedPolygon": [[{"lat": 0, "lng": 0}, {"lat": 2, "lng": 2}]]
        }"#;
        let doc: InputDoc = serde_json::from_str(raw).unwrap();
        let pts = doc.polygon_points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Point::new(0.0, 2.0));
        let edges = doc.triangulated_edges().unwrap();
        assert_eq!(edges, [Edge::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0))]);
    }

    #[test]
    fn missing_fields_default() {
        let doc: InputDoc = serde_json::from_str("{}").unwrap();
        assert!(doc.polygon.is_empty());
        assert!(doc.triangulated_edges().is_none());
    }

    #[test]
    fn links_omitted_when_absent() {
        let out = DualOut {
            segments: vec![],
            triangles: 0,
            links: None,
        };
        let v = serde_json::to_value(&out).unwrap();
        assert!(v.get("links").is_none());
        assert_eq!(v["triangles"], 0);
        assert_eq!(out.summary()["kind"], "segments");
        assert!(out.summary()["links"].is_null());
    }

    #[test]
    fn fingerprint_tracks_content() {
        let (_, a) = parse_input("a.json", r#"{"polygon": []}"#).unwrap();
        let (_, b) = parse_input("b.json", r#"{"polygon": []}"#).unwrap();
        let (_, c) = parse_input("a.json", r#"{"polygon": [{"lat": 1, "lng": 1}]}"#).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, c.fingerprint);
        assert_eq!(a.bytes, 15);
        assert_eq!(a.to_json()["path"], "a.json");
        assert!(parse_input("bad.json", "[1, 2").is_err());
    }
}
