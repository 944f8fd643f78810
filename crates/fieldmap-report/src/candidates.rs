//! Ranked candidate CSV output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use fieldmap_model::Candidate;

use crate::ensure_parent;

/// Header of the candidate table.
pub const CANDIDATE_COLUMNS: [&str; 8] = [
    "sourcePath",
    "sourceType",
    "targetPath",
    "targetType",
    "suffixLen",
    "score",
    "confidence",
    "mappedAlready",
];

/// Write candidates to `path`, replacing any existing file.
pub fn write_candidates(path: &Path, candidates: &[Candidate]) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_candidates_to(file, candidates).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        candidates = candidates.len(),
        "wrote candidate table"
    );
    Ok(())
}

/// Write candidates as CSV to any writer. The header is always written.
pub fn write_candidates_to<W: Write>(writer: W, candidates: &[Candidate]) -> Result<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(CANDIDATE_COLUMNS)
        .context("write header")?;
    for candidate in candidates {
        csv.serialize(candidate).context("write candidate")?;
    }
    csv.flush().context("flush candidates")?;
    Ok(())
}
