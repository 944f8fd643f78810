use serde::{Deserialize, Serialize};

/// A scored source→target proposal produced by the relaxed ranker.
///
/// Candidates are output only; they are never written back into the table.
/// A `suffix_len` of 0 marks a candidate found by the identifier fallback
/// search rather than by suffix matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub source_path: String,
    pub source_type: String,
    pub target_path: String,
    pub target_type: String,
    pub suffix_len: usize,
    pub score: i32,
    /// Display value derived from `score`, clamped to 0..=100.
    pub confidence: u32,
    /// True when the candidate's own source row already has status `done`.
    pub mapped_already: bool,
}

impl Candidate {
    /// Whether this candidate came from the identifier fallback search.
    pub fn is_fallback(&self) -> bool {
        self.suffix_len == 0
    }
}
