use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use fandual::api::{
    build_dual, fan_mesh_edges, is_fan_valid, triangulate, DualCfg, GeomError, Grouping,
    TriangulateCfg,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod doc;
mod provenance;

use doc::{edge_pair, read_input, segment_pair, DualOut, InputDoc, TriangulateOut};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "fandual")]
#[command(about = "Fan triangulation and dual-graph segments for polygon files")]
struct Cmd {
    /// Reject degenerate or ambiguous input instead of returning partial results
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fan-triangulate `polygon` and print the edges
    Triangulate {
        /// JSON document path, or `-` for stdin
        #[arg(long)]
        input: String,
        /// Write the result here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Build dual segments from `triangulatedPolygon`, or from the fan of `polygon`
    Dual {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
        /// One center per triangle instead of one per taken edge
        #[arg(long)]
        per_triangle: bool,
        /// Also emit center-to-center links between adjacent groups
        #[arg(long)]
        links: bool,
    },
    /// Print the tool version and default settings as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate { input, out } => run_triangulate(&input, out.as_deref(), cmd.strict),
        Action::Dual {
            input,
            out,
            per_triangle,
            links,
        } => run_dual(&input, out.as_deref(), cmd.strict, per_triangle, links),
        Action::Report => report(),
    }
}

/// Fan edges of the document's `polygon`.
fn triangulate_doc(doc: &InputDoc, strict: bool) -> Result<TriangulateOut, GeomError> {
    let polygon = doc.polygon_points();
    let edges = triangulate(&polygon, TriangulateCfg { strict_mode: strict })?;
    let fan_valid = is_fan_valid(&polygon);
    if !fan_valid && polygon.len() >= 3 {
        tracing::warn!(
            vertices = polygon.len(),
            "fan overlaps itself; polygon is not star-shaped from its first vertex"
        );
    }
    Ok(TriangulateOut {
        edges: edges.iter().map(edge_pair).collect(),
        fan_valid,
    })
}

/// Dual segments of `triangulatedPolygon`, or of the fan mesh of `polygon` when absent.
fn dual_doc(
    doc: &InputDoc,
    strict: bool,
    per_triangle: bool,
    links: bool,
) -> Result<DualOut, GeomError> {
    let edges = match doc.triangulated_edges() {
        Some(edges) => edges,
        None => {
            tracing::info!("no triangulatedPolygon; using the fan of polygon");
            fan_mesh_edges(&doc.polygon_points(), TriangulateCfg { strict_mode: strict })?
        }
    };
    let cfg = DualCfg {
        strict_mode: strict,
        grouping: if per_triangle {
            Grouping::PerTriangle
        } else {
            Grouping::Accumulate
        },
    };
    let graph = build_dual(&edges, cfg)?;
    tracing::info!(
        edges = edges.len(),
        groups = graph.groups.len(),
        triangles = graph.triangle_count(),
        "dual_done"
    );
    Ok(DualOut {
        segments: graph.segments().iter().map(segment_pair).collect(),
        triangles: graph.triangle_count(),
        links: links.then(|| graph.center_links().iter().map(segment_pair).collect()),
    })
}

fn run_triangulate(input: &str, out: Option<&str>, strict: bool) -> Result<()> {
    tracing::info!(input, out = ?out, strict, "triangulate");
    let (doc, source) = read_input(input)?;
    let result = triangulate_doc(&doc, strict)?;
    let payload = Payload {
        command: "triangulate",
        source,
        params: serde_json::json!({ "strict": strict }),
        output: result.summary(),
    };
    emit(&result, out, &payload)?;
    Ok(())
}

fn run_dual(
    input: &str,
    out: Option<&str>,
    strict: bool,
    per_triangle: bool,
    links: bool,
) -> Result<()> {
    tracing::info!(input, out = ?out, strict, per_triangle, links, "dual");
    let (doc, source) = read_input(input)?;
    let result = dual_doc(&doc, strict, per_triangle, links)?;
    let payload = Payload {
        command: "dual",
        source,
        params: serde_json::json!({
            "strict": strict,
            "per_triangle": per_triangle,
            "links": links
        }),
        output: result.summary(),
    };
    emit(&result, out, &payload)?;
    Ok(())
}

/// Print to stdout, or write `out` and its provenance sidecar (returned).
fn emit<T: Serialize>(
    result: &T,
    out: Option<&str>,
    payload: &Payload,
) -> Result<Option<PathBuf>> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(None);
    };
    let out_path = Path::new(out);
    if out_path.is_dir() {
        bail!("--out must be a file path, got directory {out}");
    }
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(result)?)?;
    let prov = write_sidecar(out_path, payload)?;
    tracing::info!(out, provenance = %prov.display(), "written");
    Ok(Some(prov))
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "tool": "fandual",
        "version": fandual::VERSION,
        "defaults": {
            "strict": false,
            "grouping": format!("{:?}", Grouping::default())
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::parse_input;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE: &str = r#"{"polygon": [
        {"lat": 0, "lng": 0}, {"lat": 0, "lng": 2}, {"lat": 2, "lng": 2}, {"lat": 2, "lng": 0}
    ]}"#;

    fn doc(raw: &str) -> InputDoc {
        parse_input("test.json", raw).unwrap().0
    }

    #[test]
    fn triangulate_output_shape() {
        let out = triangulate_doc(&doc(SQUARE), false).unwrap();
        assert_eq!(out.edges.len(), 3);
        assert!(out.fan_valid);
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["fan_valid"], true);
        // anchor first, then the third vertex
        assert_eq!(v["edges"][1][0]["lat"], 0.0);
        assert_eq!(v["edges"][1][1]["lng"], 2.0);
        assert_eq!(v["edges"][1][1]["lat"], 2.0);
    }

    #[test]
    fn strict_flag_turns_small_polygon_into_error() {
        let two = doc(r#"{"polygon": [{"lat": 0, "lng": 0}, {"lat": 1, "lng": 1}]}"#);
        let legacy = triangulate_doc(&two, false).unwrap();
        assert!(legacy.edges.is_empty());
        assert!(!legacy.fan_valid);
        assert_eq!(
            triangulate_doc(&two, true).unwrap_err(),
            GeomError::TooFewVertices { got: 2 }
        );
        assert_eq!(
            dual_doc(&two, true, false, false).unwrap_err(),
            GeomError::TooFewVertices { got: 2 }
        );
    }

    #[test]
    fn dual_falls_back_to_fan_mesh_of_polygon() {
        let out = dual_doc(&doc(SQUARE), true, true, true).unwrap();
        assert_eq!(out.triangles, 2);
        assert_eq!(out.segments.len(), 6);
        assert_eq!(out.links.as_ref().map(Vec::len), Some(1));
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["triangles"], 2);
        assert!(v["links"].is_array());

        let no_links = serde_json::to_value(dual_doc(&doc(SQUARE), false, false, false).unwrap())
            .unwrap();
        assert!(no_links.get("links").is_none());
    }

    #[test]
    fn dual_prefers_triangulated_polygon() {
        let raw = r#"{
            "polygon": [{"lat": 0, "lng": 0}, {"lat": 0, "lng": 2}, {"lat": 2, "lng": 2}, {"lat": 2, "lng": 0}],
            "triangulatedPolygon": [
                [{"lat": 0, "lng": 0}, {"lat": 2, "lng": 0}],
                [{"lat": 2, "lng": 0}, {"lat": 1, "lng": 2}],
                [{"lat": 1, "lng": 2}, {"lat": 0, "lng": 0}]
            ]
        }"#;
        let out = dual_doc(&doc(raw), false, false, false).unwrap();
        assert_eq!(out.triangles, 1);
        assert_eq!(out.segments.len(), 3);
        // every segment starts at the triangle center (1, 2/3)
        for [from, _] in &out.segments {
            assert!((from.lat - 1.0).abs() < 1e-12);
            assert!((from.lng - 2.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn strict_dual_rejects_open_fan_lines() {
        let raw = r#"{"triangulatedPolygon": [
            [{"lat": 0, "lng": 0}, {"lat": 0, "lng": 2}],
            [{"lat": 0, "lng": 0}, {"lat": 2, "lng": 2}]
        ]}"#;
        assert!(matches!(
            dual_doc(&doc(raw), true, false, false),
            Err(GeomError::DanglingEdge { .. })
        ));
        let legacy = dual_doc(&doc(raw), false, false, false).unwrap();
        assert!(legacy.segments.is_empty());
    }

    #[test]
    fn dual_file_run_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.json");
        fs::write(&input, SQUARE).unwrap();
        let out = dir.path().join("nested").join("dual.json");
        let input_str = input.to_string_lossy().to_string();
        let out_str = out.to_string_lossy().to_string();
        run_dual(&input_str, Some(&out_str), false, true, false).unwrap();

        let result: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(result["triangles"], 2);
        assert_eq!(result["segments"].as_array().map(Vec::len), Some(6));

        let prov_path = dir.path().join("nested").join("dual.provenance.json");
        let prov: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        let (_, source) = parse_input(&input_str, SQUARE).unwrap();
        assert_eq!(prov["command"], "dual");
        assert_eq!(prov["input"]["fingerprint"], source.fingerprint.as_str());
        assert_eq!(prov["params"]["per_triangle"], true);
        assert_eq!(prov["output"]["kind"], "segments");
        assert_eq!(prov["output"]["segments"], 6);
        assert_eq!(prov["output"]["triangles"], 2);
    }

    #[test]
    fn out_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let (_, source) = parse_input("x.json", SQUARE).unwrap();
        let payload = Payload {
            command: "triangulate",
            source,
            params: Value::Null,
            output: Value::Null,
        };
        let out = dir.path().to_string_lossy().to_string();
        assert!(emit(&Value::Null, Some(&out), &payload).is_err());
    }
}
