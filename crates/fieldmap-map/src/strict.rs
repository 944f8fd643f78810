//! Strict inference: commit a target only when it is unambiguous.
//!
//! For each unmapped row the source path's suffixes are probed from the
//! longest indexed length down. The first length with compatible candidates
//! decides the row: one candidate is committed, two or more leave the row
//! unmapped. A shorter suffix is never consulted after an ambiguous longer
//! one.

use fieldmap_model::{FieldRow, FieldTable, InferenceOptions, row::STATUS_DONE};

use crate::index::SuffixIndex;
use crate::path::{is_list_path, normalize_path, simple_type};

/// Prefix of the provenance note appended to inferred rows.
pub const PROVENANCE_PREFIX: &str = "inferred-from-target:";

/// A source path and the target path inferred for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredPair {
    /// Index of the inferred row in the table.
    pub row: usize,
    pub source_path: String,
    pub target_path: String,
    /// Suffix length that produced the match.
    pub suffix_len: usize,
}

/// Counts and samples from one strict inference pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceReport {
    pub total_rows: usize,
    /// Rows that received a target, in table order.
    pub inferred: Vec<InferredPair>,
    /// Rows left unmapped because several candidates tied at the best suffix.
    pub ambiguous: usize,
    /// Rows without a usable source path.
    pub skipped: usize,
    /// Rows with no compatible candidate at any suffix length.
    pub unmatched: usize,
}

impl InferenceReport {
    pub fn inferred_count(&self) -> usize {
        self.inferred.len()
    }
}

/// Result of [`infer`]: the rewritten table and its report.
#[derive(Debug, Clone)]
pub struct InferenceOutcome {
    pub table: FieldTable,
    pub report: InferenceReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Unique { row: usize, suffix_len: usize },
    Ambiguous { suffix_len: usize, candidates: usize },
    NoMatch,
}

/// Runs strict inference and returns a new table with resolved rows filled.
///
/// Rows that already have a target path are never modified, so running the
/// engine on its own output changes nothing.
pub fn infer(table: &FieldTable, options: &InferenceOptions) -> InferenceOutcome {
    let index = SuffixIndex::build(table, options.max_suffix_len);
    let mut output = table.clone();
    let mut report = InferenceReport {
        total_rows: table.len(),
        ..InferenceReport::default()
    };

    for (idx, row) in table.iter().enumerate() {
        let source = row.source_path_trimmed();
        if source.is_empty() {
            report.skipped += 1;
            continue;
        }
        if !row.target_path_trimmed().is_empty() {
            continue;
        }
        let segments = normalize_path(source);
        if segments.is_empty() {
            report.skipped += 1;
            continue;
        }

        match resolve(table, &index, row, &segments) {
            Resolution::Unique {
                row: target_idx,
                suffix_len,
            } => {
                let target = &table.rows[target_idx];
                let target_path = target.target_path_trimmed().to_string();
                tracing::debug!(
                    source = source,
                    target = %target_path,
                    suffix_len,
                    "inferred target"
                );
                apply(&mut output.rows[idx], target, options);
                report.inferred.push(InferredPair {
                    row: idx,
                    source_path: row.source_path.clone(),
                    target_path,
                    suffix_len,
                });
            }
            Resolution::Ambiguous {
                suffix_len,
                candidates,
            } => {
                tracing::debug!(source = source, suffix_len, candidates, "ambiguous suffix");
                report.ambiguous += 1;
            }
            Resolution::NoMatch => {
                tracing::trace!(source = source, "no candidate at any suffix length");
                report.unmatched += 1;
            }
        }
    }

    tracing::info!(
        total = report.total_rows,
        inferred = report.inferred_count(),
        ambiguous = report.ambiguous,
        skipped = report.skipped,
        unmatched = report.unmatched,
        "strict inference finished"
    );

    InferenceOutcome {
        table: output,
        report,
    }
}

fn resolve(
    table: &FieldTable,
    index: &SuffixIndex,
    row: &FieldRow,
    segments: &[String],
) -> Resolution {
    let source_is_list = is_list_path(&row.source_path);
    let source_type = row.source_type_trimmed();

    for k in (1..=index.probe_start(segments.len())).rev() {
        let hits = index.lookup(segments, k);
        if hits.is_empty() {
            continue;
        }
        let survivors: Vec<usize> = hits
            .iter()
            .copied()
            .filter(|&i| is_compatible(source_is_list, source_type, &table.rows[i]))
            .collect();
        match survivors.as_slice() {
            [] => continue,
            [only] => {
                return Resolution::Unique {
                    row: *only,
                    suffix_len: k,
                };
            }
            many => {
                return Resolution::Ambiguous {
                    suffix_len: k,
                    candidates: many.len(),
                };
            }
        }
    }
    Resolution::NoMatch
}

/// List shapes must agree; types must agree when both sides declare one.
pub(crate) fn is_compatible(source_is_list: bool, source_type: &str, target: &FieldRow) -> bool {
    if source_is_list != is_list_path(target.target_path_trimmed()) {
        return false;
    }
    let target_type = target.target_type_trimmed();
    if source_type.is_empty() || target_type.is_empty() {
        return true;
    }
    let source_simple = simple_type(source_type);
    !source_simple.is_empty() && source_simple == simple_type(target_type)
}

fn apply(row: &mut FieldRow, target: &FieldRow, options: &InferenceOptions) {
    let target_path = target.target_path_trimmed().to_string();
    row.target_type = target.target_type_trimmed().to_string();
    row.mapping_strategy = options.strategy_label.clone();
    row.status = STATUS_DONE.to_string();
    row.append_note(&format!("{PROVENANCE_PREFIX}{target_path}"));
    row.target_path = target_path;
}
