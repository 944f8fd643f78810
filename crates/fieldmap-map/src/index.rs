//! Suffix index over target paths.

use std::collections::HashMap;

use fieldmap_model::FieldTable;

use crate::path::normalize_path;

/// Maps `(k, last k target segments)` to the rows whose target path ends
/// with those segments.
///
/// Only suffixes up to `max_len` segments are indexed. Row indices are kept
/// in table order.
#[derive(Debug, Clone, Default)]
pub struct SuffixIndex {
    max_len: usize,
    entries: HashMap<(usize, Vec<String>), Vec<usize>>,
}

impl SuffixIndex {
    /// Indexes every row with a non-empty target path.
    pub fn build(table: &FieldTable, max_len: usize) -> Self {
        let mut entries: HashMap<(usize, Vec<String>), Vec<usize>> = HashMap::new();
        for (idx, row) in table.iter().enumerate() {
            let target = row.target_path_trimmed();
            if target.is_empty() {
                continue;
            }
            let segments = normalize_path(target);
            for k in 1..=segments.len().min(max_len) {
                let key = segments[segments.len() - k..].to_vec();
                entries.entry((k, key)).or_default().push(idx);
            }
        }
        tracing::debug!(keys = entries.len(), max_len, "built suffix index");
        Self { max_len, entries }
    }

    /// Rows whose target path ends with the last `k` of `segments`.
    ///
    /// Returns an empty slice when `k` is zero, exceeds the segment count or
    /// exceeds the indexed maximum.
    pub fn lookup(&self, segments: &[String], k: usize) -> &[usize] {
        if k == 0 || k > segments.len() || k > self.max_len {
            return &[];
        }
        let key = (k, segments[segments.len() - k..].to_vec());
        self.entries.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Longest suffix length worth probing for a path with `segment_count`
    /// segments.
    pub fn probe_start(&self, segment_count: usize) -> usize {
        segment_count.min(self.max_len)
    }
}

#[cfg(test)]
mod tests {
    use fieldmap_model::FieldRow;

    use super::*;

    fn segs(path: &str) -> Vec<String> {
        normalize_path(path)
    }

    fn table() -> FieldTable {
        FieldTable::with_core_columns(vec![
            FieldRow::source("s1", "").with_target("m.a.b.c", "C"),
            FieldRow::source("s2", "").with_target("n.x[].b.c", "C"),
            FieldRow::source("s3", ""),
        ])
    }

    #[test]
    fn indexes_every_suffix_length() {
        let index = SuffixIndex::build(&table(), 6);
        assert_eq!(index.lookup(&segs("q.c"), 1), &[0, 1]);
        assert_eq!(index.lookup(&segs("q.b.c"), 2), &[0, 1]);
        assert_eq!(index.lookup(&segs("a.b.c"), 3), &[0]);
        assert_eq!(index.lookup(&segs("x.b.c"), 3), &[1]);
        assert_eq!(index.lookup(&segs("m.a.b.c"), 4), &[0]);
    }

    #[test]
    fn respects_max_len() {
        let index = SuffixIndex::build(&table(), 2);
        assert_eq!(index.lookup(&segs("a.b.c"), 3), &[] as &[usize]);
        assert_eq!(index.probe_start(4), 2);
        assert_eq!(index.probe_start(1), 1);
    }

    #[test]
    fn rows_without_target_are_not_indexed() {
        let index = SuffixIndex::build(&table(), 6);
        assert!(index.lookup(&segs("s3"), 1).is_empty());
        assert!(index.lookup(&segs("c"), 0).is_empty());
        assert!(index.lookup(&segs("c"), 2).is_empty());
    }
}
