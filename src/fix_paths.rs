//! Rebases the artifact URIs of an existing SARIF log onto a base directory.
//!
//! The typed view below only checks that the keys on the way down to
//! `artifactLocation.uri` exist. The rewrite itself happens on the parsed
//! JSON value, so keys keep their input order.

use crate::document;
use crate::error::Result;
use crate::paths;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

pub const DOCUMENT_KIND: &str = "SARIF";

#[derive(Debug, Deserialize)]
struct SarifDocument {
    runs: Vec<RunEntry>,
}

#[derive(Debug, Deserialize)]
struct RunEntry {
    results: Vec<ResultEntry>,
}

#[derive(Debug, Deserialize)]
struct ResultEntry {
    locations: Vec<LocationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationEntry {
    physical_location: PhysicalLocationEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocationEntry {
    artifact_location: ArtifactLocationEntry,
}

#[derive(Debug, Deserialize)]
struct ArtifactLocationEntry {
    uri: String,
}

/// Rewrites every location URI in `log` to `base` joined with the normalized
/// URI. `source` only names the document in errors. Returns the number of
/// URIs rewritten; a malformed log is rejected before anything changes.
pub fn rebase_uris(log: &mut Value, base: &str, source: &Path) -> Result<usize> {
    let view: SarifDocument = document::check_shape(log, source, DOCUMENT_KIND)?;

    let mut rewritten = 0;
    for (run_index, run) in view.runs.iter().enumerate() {
        for (result_index, result) in run.results.iter().enumerate() {
            for (location_index, location) in result.locations.iter().enumerate() {
                let pointer = format!(
                    "/runs/{run_index}/results/{result_index}/locations/{location_index}\
                     /physicalLocation/artifactLocation/uri"
                );
                let uri = &location.physical_location.artifact_location.uri;
                let rebased = paths::rebase(Some(base), uri);
                if let Some(slot) = log.pointer_mut(&pointer) {
                    debug!(from = %uri, to = %rebased, "rebased artifact uri");
                    *slot = Value::String(rebased);
                    rewritten += 1;
                }
            }
        }
    }
    Ok(rewritten)
}

/// Rewrites the SARIF file at `path` in place. Nothing is written when the
/// document does not have the expected shape.
pub fn fix_file(path: &Path, base: &str) -> Result<usize> {
    let mut log: Value = document::read_json(path, DOCUMENT_KIND)?;
    let rewritten = rebase_uris(&mut log, base, path)?;
    document::write_json(path, &log)?;
    info!(path = %path.display(), base, rewritten, "rewrote SARIF artifact paths");
    Ok(rewritten)
}
