//! Relaxed candidate ranking.
//!
//! Unlike the strict engine this never commits a mapping. Every target
//! reachable through any suffix length is scored and kept, so a curator can
//! pick from a ranked shortlist.

use std::collections::HashSet;

use fieldmap_model::{Candidate, FieldRow, FieldTable, InferenceOptions};

use crate::index::SuffixIndex;
use crate::path::normalize_path;
use crate::patterns::{
    FALLBACK_SOURCE_KEYWORDS, FALLBACK_TARGET_KEYWORDS, ID_MARKER, contains_any,
};
use crate::score::{CandidateScore, SuffixMatch};

/// Ranked candidates from one relaxed pass.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    candidates: Vec<Candidate>,
    /// Rows in the input table.
    pub total_rows: usize,
    /// Unmapped rows with a usable source path.
    pub sources_considered: usize,
    /// Rows without a usable source path.
    pub skipped: usize,
    /// Sources that only received fallback candidates.
    pub fallback_sources: usize,
}

impl Ranking {
    /// All candidates, ordered by source path, then confidence and score
    /// descending.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of distinct source paths with at least one candidate.
    pub fn source_count(&self) -> usize {
        self.candidates
            .chunk_by(|a, b| a.source_path == b.source_path)
            .count()
    }

    /// Candidates with each (source, target) pair listed once.
    pub fn distinct_pairs(&self) -> impl Iterator<Item = &Candidate> {
        let mut seen = HashSet::new();
        self.candidates
            .iter()
            .filter(move |c| seen.insert((c.source_path.as_str(), c.target_path.as_str())))
    }

    /// The highest (confidence, score) candidate of each source path,
    /// ordered by confidence descending.
    pub fn best_per_source(&self) -> Vec<&Candidate> {
        let mut best: Vec<&Candidate> = self
            .candidates
            .chunk_by(|a, b| a.source_path == b.source_path)
            .filter_map(|group| group.first())
            .collect();
        best.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        best
    }
}

/// Scores every suffix-matched target for each unmapped row.
pub fn rank(table: &FieldTable, options: &InferenceOptions) -> Ranking {
    let index = SuffixIndex::build(table, options.max_suffix_len);
    let mut ranking = Ranking {
        total_rows: table.len(),
        ..Ranking::default()
    };

    for row in table {
        let source = row.source_path_trimmed();
        if source.is_empty() {
            ranking.skipped += 1;
            continue;
        }
        if !row.needs_target() {
            continue;
        }
        let segments = normalize_path(source);
        if segments.is_empty() {
            ranking.skipped += 1;
            continue;
        }
        ranking.sources_considered += 1;

        let mut seen: HashSet<&str> = HashSet::new();
        for k in (1..=index.probe_start(segments.len())).rev() {
            for &i in index.lookup(&segments, k) {
                let target = &table.rows[i];
                let target_path = target.target_path_trimmed();
                if target_path.is_empty() || !seen.insert(target_path) {
                    continue;
                }
                let score = CandidateScore::suffix_match(&SuffixMatch {
                    suffix_len: k,
                    source_path: &row.source_path,
                    source_type: row.source_type_trimmed(),
                    target_path,
                    target_type: target.target_type_trimmed(),
                });
                tracing::trace!(
                    source = row.source_path_trimmed(),
                    target = target_path,
                    explain = %score.explain(),
                    "suffix candidate"
                );
                ranking.candidates.push(candidate(row, target, k, &score));
            }
        }

        if seen.is_empty() && fallback(table, row, &segments, &mut ranking.candidates) {
            ranking.fallback_sources += 1;
        }
    }

    ranking.candidates.sort_by(|a, b| {
        a.source_path
            .cmp(&b.source_path)
            .then_with(|| b.confidence.cmp(&a.confidence))
            .then_with(|| b.score.cmp(&a.score))
    });

    tracing::info!(
        total = ranking.total_rows,
        sources = ranking.sources_considered,
        skipped = ranking.skipped,
        candidates = ranking.len(),
        fallback_sources = ranking.fallback_sources,
        "relaxed ranking finished"
    );

    ranking
}

/// Identifier fallback for sources with no suffix match at all.
///
/// Only id-like sources are considered, and only targets that name a
/// branch or financial-institution identifier structure and end in an id.
/// Every matching row is proposed, including rows sharing a target path.
/// Returns true when at least one candidate was added.
fn fallback(
    table: &FieldTable,
    row: &FieldRow,
    segments: &[String],
    out: &mut Vec<Candidate>,
) -> bool {
    let source_last = segments
        .last()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    if !contains_any(&source_last, FALLBACK_SOURCE_KEYWORDS) {
        return false;
    }

    let mut added = 0usize;
    for target in table {
        let target_path = target.target_path_trimmed();
        if target_path.is_empty() {
            continue;
        }
        let target_segments = normalize_path(target_path);
        let Some(target_last) = target_segments.last() else {
            continue;
        };
        if !target_last.to_lowercase().contains(ID_MARKER) {
            continue;
        }
        let target_key = target_segments.join(".").to_lowercase();
        if !contains_any(&target_key, FALLBACK_TARGET_KEYWORDS) {
            continue;
        }
        let score = CandidateScore::fallback(
            row.source_type_trimmed(),
            &target_key,
            target.target_type_trimmed(),
        );
        out.push(candidate(row, target, 0, &score));
        added += 1;
    }

    if added > 0 {
        tracing::debug!(
            source = row.source_path_trimmed(),
            candidates = added,
            "identifier fallback"
        );
    }
    added > 0
}

fn candidate(
    source: &FieldRow,
    target: &FieldRow,
    suffix_len: usize,
    score: &CandidateScore,
) -> Candidate {
    Candidate {
        source_path: source.source_path_trimmed().to_string(),
        source_type: source.source_type_trimmed().to_string(),
        target_path: target.target_path_trimmed().to_string(),
        target_type: target.target_type_trimmed().to_string(),
        suffix_len,
        score: score.value(),
        confidence: score.confidence(),
        mapped_already: source.is_done(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapped(target: &str, target_type: &str) -> FieldRow {
        FieldRow::source("x", "")
            .with_target(target, target_type)
            .with_status("done")
    }

    fn unmapped(source: &str, source_type: &str) -> FieldRow {
        FieldRow::source(source, source_type).with_status("not-started")
    }

    fn run(rows: Vec<FieldRow>) -> Ranking {
        rank(
            &FieldTable::with_core_columns(rows),
            &InferenceOptions::default(),
        )
    }

    #[test]
    fn proposes_every_suffix_length() {
        let ranking = run(vec![
            unmapped("src.pty.nm", "Max140Text"),
            mapped("tgtA.pty.nm", "Max140Text"),
            mapped("tgtB.pty.nm", "Max140Text"),
            mapped("other.nm", "Max140Text"),
        ]);
        let targets: Vec<_> = ranking
            .candidates()
            .iter()
            .map(|c| (c.target_path.as_str(), c.suffix_len, c.score))
            .collect();
        // 20 + 5 + 8 and 10 + 5 + 8
        assert_eq!(
            targets,
            vec![("tgtA.pty.nm", 2, 33), ("tgtB.pty.nm", 2, 33), ("other.nm", 1, 23)]
        );
        assert_eq!(ranking.candidates()[0].confidence, 100);
        assert_eq!(ranking.candidates()[2].confidence, 92);
    }

    #[test]
    fn target_paths_are_proposed_once_per_source() {
        let ranking = run(vec![
            unmapped("a.b.c", ""),
            mapped("z.b.c", ""),
            mapped("z.b.c", ""),
        ]);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.candidates()[0].suffix_len, 2);
    }

    #[test]
    fn sorted_by_source_then_confidence() {
        let ranking = run(vec![
            unmapped("b.nm", ""),
            unmapped("a.pty[].nm", ""),
            mapped("t.pty[].nm", ""),
            mapped("u.nm", ""),
        ]);
        let order: Vec<_> = ranking
            .candidates()
            .iter()
            .map(|c| (c.source_path.as_str(), c.target_path.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a.pty[].nm", "t.pty[].nm"),
                ("a.pty[].nm", "u.nm"),
                ("b.nm", "u.nm"),
                ("b.nm", "t.pty[].nm"),
            ]
        );
    }

    #[test]
    fn fallback_only_surfaces_institution_ids() {
        let ranking = run(vec![
            unmapped("msgA.dbtr.id.orgId", "OrganisationIdentification"),
            mapped("msgB.dbtrAgt.finInstnId.clrSysMmbId.mmbId", "Max35Text"),
            mapped("msgB.cdtrAgt.brnchId.id", "Max35Text"),
            // Final segment lacks "id".
            mapped("msgB.cdtrAgt.finInstnId.bic", "BICIdentifier"),
            mapped("msgB.pmtInf.amtDetails", "Amount"),
            mapped("msgB.dbtr.nm", "Max140Text"),
            mapped("msgB.finInstnId.nm", "Max140Text"),
        ]);
        let targets: Vec<_> = ranking
            .candidates()
            .iter()
            .map(|c| c.target_path.as_str())
            .collect();
        assert_eq!(
            targets,
            vec![
                "msgB.dbtrAgt.finInstnId.clrSysMmbId.mmbId",
                "msgB.cdtrAgt.brnchId.id"
            ]
        );
        assert!(ranking.candidates().iter().all(Candidate::is_fallback));
        assert!(ranking.candidates().iter().all(|c| c.confidence == 54));
        assert_eq!(ranking.fallback_sources, 1);
    }

    #[test]
    fn fallback_proposes_every_matching_row() {
        let ranking = run(vec![
            unmapped("msgA.dbtr.orgId", ""),
            mapped("msgB.cdtrAgt.brnchId.id", "Max35Text"),
            mapped("msgB.cdtrAgt.brnchId.id", "Max35Text"),
        ]);
        assert_eq!(ranking.len(), 2);
        assert!(
            ranking
                .candidates()
                .iter()
                .all(|c| c.target_path == "msgB.cdtrAgt.brnchId.id" && c.is_fallback())
        );
        assert_eq!(ranking.fallback_sources, 1);
    }

    #[test]
    fn counts_rows_without_usable_source() {
        let ranking = run(vec![
            FieldRow::default().with_target("only.target", ""),
            unmapped(" . [] ", ""),
            unmapped("q.b", ""),
            mapped("z.b", ""),
        ]);
        assert_eq!(ranking.total_rows, 4);
        assert_eq!(ranking.skipped, 2);
        assert_eq!(ranking.sources_considered, 1);
        assert_eq!(ranking.len(), 1);
    }

    #[test]
    fn fallback_needs_id_like_source() {
        let ranking = run(vec![
            unmapped("msgA.dbtr.nm", ""),
            mapped("msgB.cdtrAgt.brnchId.id", ""),
        ]);
        assert!(ranking.is_empty());
    }

    #[test]
    fn fallback_is_skipped_when_any_suffix_matched() {
        let ranking = run(vec![
            unmapped("msgA.dbtr.orgId", ""),
            mapped("msgB.cdtr.orgId", ""),
            mapped("msgB.cdtrAgt.brnchId.id", ""),
        ]);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.candidates()[0].target_path, "msgB.cdtr.orgId");
    }

    #[test]
    fn mapped_already_reflects_source_status() {
        let ranking = run(vec![
            FieldRow::source("a.b", "").with_status("Done"),
            mapped("c.b", ""),
        ]);
        assert!(ranking.candidates()[0].mapped_already);
    }

    #[test]
    fn best_per_source_and_distinct_pairs() {
        let ranking = run(vec![
            unmapped("a.pty.nm", ""),
            unmapped("b.x.nm", ""),
            mapped("t.pty.nm", ""),
            mapped("u.nm", ""),
        ]);
        let best: Vec<_> = ranking
            .best_per_source()
            .into_iter()
            .map(|c| (c.source_path.as_str(), c.target_path.as_str()))
            .collect();
        assert_eq!(best, vec![("a.pty.nm", "t.pty.nm"), ("b.x.nm", "t.pty.nm")]);
        assert_eq!(ranking.distinct_pairs().count(), 4);
        assert_eq!(ranking.source_count(), 2);
    }
}
