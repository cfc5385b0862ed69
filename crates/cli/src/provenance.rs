//! `<stem>.provenance.json` next to every written result: which command ran,
//! on which input (path, size, fingerprint), with which flags, producing what.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::doc::Source;

/// Everything the sidecar records besides the output path.
pub struct Payload {
    pub command: &'static str,
    pub source: Source,
    pub params: Value,
    /// Output kind and counts, e.g. `{"kind": "segments", "segments": 6}`.
    pub output: Value,
}

pub fn write_sidecar(artifact: &Path, payload: &Payload) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let mut output = payload.output.clone();
    output["path"] = json!(artifact.to_string_lossy());
    let doc = json!({
        "tool": "fandual",
        "version": fandual::VERSION,
        "command": payload.command,
        "input": payload.source.to_json(),
        "params": payload.params,
        "output": output
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    artifact.with_file_name(format!("{stem}.provenance.json"))
}
