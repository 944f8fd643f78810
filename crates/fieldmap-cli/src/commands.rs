//! Command implementations: load, run an engine, write results.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use fieldmap_ingest::{declared_targets, load_field_table};
use fieldmap_map::{infer, rank, scaffold};
use fieldmap_model::{InferenceOptions, ScaffoldOptions};
use fieldmap_report::{write_candidates, write_field_table};

use crate::types::{InferResult, RankResult, ScaffoldResult};

/// Default file name for the strict engine output.
pub const INFERRED_FILE_NAME: &str = "mapping_matrix_inferred.csv";
/// Default file name for the relaxed ranking output.
pub const CANDIDATES_FILE_NAME: &str = "mapping_matrix_candidates_relaxed.csv";

/// Strict inference over `input`, writing the updated table.
pub fn run_infer(
    input: &Path,
    output: Option<&Path>,
    options: &InferenceOptions,
) -> Result<InferResult> {
    let span = info_span!("infer", input = %input.display());
    let _guard = span.enter();

    let table = load_field_table(input)
        .with_context(|| format!("load mapping table {}", input.display()))?;
    let output = resolve_output(input, output, INFERRED_FILE_NAME);

    let outcome = infer(&table, options);
    write_field_table(&output, &outcome.table)?;
    info!(
        output = %output.display(),
        inferred = outcome.report.inferred_count(),
        "infer complete"
    );

    Ok(InferResult {
        input: input.to_path_buf(),
        output,
        report: outcome.report,
    })
}

/// Relaxed ranking over `input`, writing one row per candidate.
pub fn run_rank(
    input: &Path,
    output: Option<&Path>,
    options: &InferenceOptions,
) -> Result<RankResult> {
    let span = info_span!("rank", input = %input.display());
    let _guard = span.enter();

    let table = load_field_table(input)
        .with_context(|| format!("load mapping table {}", input.display()))?;
    let output = resolve_output(input, output, CANDIDATES_FILE_NAME);

    let ranking = rank(&table, options);
    write_candidates(&output, ranking.candidates())?;
    info!(
        output = %output.display(),
        candidates = ranking.len(),
        "rank complete"
    );

    Ok(RankResult {
        input: input.to_path_buf(),
        output,
        ranking,
    })
}

/// Declarations for not-started rows, skipping targets the mapper declares.
pub fn run_scaffold(
    input: &Path,
    mapper: Option<&Path>,
    options: &ScaffoldOptions,
) -> Result<ScaffoldResult> {
    let table = load_field_table(input)
        .with_context(|| format!("load mapping table {}", input.display()))?;
    let declared = match mapper {
        Some(path) => declared_targets(path)
            .with_context(|| format!("read mapper {}", path.display()))?,
        None => BTreeSet::new(),
    };

    let declarations = scaffold(&table, options, &declared);
    Ok(ScaffoldResult {
        input: input.to_path_buf(),
        declared: declared.len(),
        declarations,
    })
}

/// Explicit output path, or `file_name` next to the input.
fn resolve_output(input: &Path, output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input
            .parent()
            .map_or_else(|| PathBuf::from(file_name), |dir| dir.join(file_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_next_to_input() {
        let out = resolve_output(Path::new("data/matrix.csv"), None, INFERRED_FILE_NAME);
        assert_eq!(out, Path::new("data").join(INFERRED_FILE_NAME));
    }

    #[test]
    fn bare_file_name_defaults_to_current_dir() {
        let out = resolve_output(Path::new("matrix.csv"), None, CANDIDATES_FILE_NAME);
        assert_eq!(out, PathBuf::from(CANDIDATES_FILE_NAME));
    }

    #[test]
    fn explicit_output_wins() {
        let out = resolve_output(
            Path::new("data/matrix.csv"),
            Some(Path::new("out/x.csv")),
            INFERRED_FILE_NAME,
        );
        assert_eq!(out, PathBuf::from("out/x.csv"));
    }
}
