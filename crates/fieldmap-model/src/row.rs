//! Mapping table rows and the table that owns them.
//!
//! Cells are kept exactly as read so that rows the engines never touch are
//! written back byte-for-byte. Accessors that drive matching trim.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ModelError, Result};

/// Column names of the mapping table.
pub mod columns {
    pub const SOURCE_PATH: &str = "sourcePath";
    pub const SOURCE_TYPE: &str = "sourceType";
    pub const TARGET_PATH: &str = "targetPath";
    pub const TARGET_TYPE: &str = "targetType";
    pub const MAPPING_STRATEGY: &str = "mappingStrategy";
    pub const STATUS: &str = "status";
    pub const NOTES: &str = "notes";

    /// Core columns in canonical order.
    pub const CORE: [&str; 7] = [
        SOURCE_PATH,
        SOURCE_TYPE,
        TARGET_PATH,
        TARGET_TYPE,
        MAPPING_STRATEGY,
        STATUS,
        NOTES,
    ];

    /// Columns the loader cannot do without.
    pub const REQUIRED: [&str; 2] = [SOURCE_PATH, TARGET_PATH];

    pub fn is_core(name: &str) -> bool {
        CORE.contains(&name)
    }
}

/// Status value for rows whose mapping is complete.
pub const STATUS_DONE: &str = "done";
/// Status value for rows nobody has worked on yet.
pub const STATUS_NOT_STARTED: &str = "not-started";

/// One source/target field pair of the mapping table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRow {
    pub source_path: String,
    pub source_type: String,
    pub target_path: String,
    pub target_type: String,
    pub mapping_strategy: String,
    pub status: String,
    pub notes: String,
    /// Non-core columns, keyed by header name.
    pub extra: BTreeMap<String, String>,
}

impl FieldRow {
    /// Row with only the source side filled in.
    pub fn source(path: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            source_path: path.into(),
            source_type: type_name.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for the target side.
    #[must_use]
    pub fn with_target(mut self, path: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.target_path = path.into();
        self.target_type = type_name.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn source_path_trimmed(&self) -> &str {
        self.source_path.trim()
    }

    pub fn source_type_trimmed(&self) -> &str {
        self.source_type.trim()
    }

    pub fn target_path_trimmed(&self) -> &str {
        self.target_path.trim()
    }

    pub fn target_type_trimmed(&self) -> &str {
        self.target_type.trim()
    }

    /// True when the row has a source path and no target path yet.
    pub fn needs_target(&self) -> bool {
        !self.source_path_trimmed().is_empty() && self.target_path_trimmed().is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(STATUS_DONE)
    }

    pub fn is_not_started(&self) -> bool {
        self.status.trim() == STATUS_NOT_STARTED
    }

    /// Append a provenance note, separated from existing notes by `;`.
    pub fn append_note(&mut self, note: &str) {
        if self.notes.is_empty() {
            self.notes = note.to_string();
        } else {
            self.notes.push(';');
            self.notes.push_str(note);
        }
    }

    /// Cell value by column name. Unknown non-core columns yield `None`.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            columns::SOURCE_PATH => Some(&self.source_path),
            columns::SOURCE_TYPE => Some(&self.source_type),
            columns::TARGET_PATH => Some(&self.target_path),
            columns::TARGET_TYPE => Some(&self.target_type),
            columns::MAPPING_STRATEGY => Some(&self.mapping_strategy),
            columns::STATUS => Some(&self.status),
            columns::NOTES => Some(&self.notes),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match column {
            columns::SOURCE_PATH => self.source_path = value,
            columns::SOURCE_TYPE => self.source_type = value,
            columns::TARGET_PATH => self.target_path = value,
            columns::TARGET_TYPE => self.target_type = value,
            columns::MAPPING_STRATEGY => self.mapping_strategy = value,
            columns::STATUS => self.status = value,
            columns::NOTES => self.notes = value,
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }
}

/// An owned mapping table: the original header list plus its rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    headers: Vec<String>,
    pub rows: Vec<FieldRow>,
}

impl FieldTable {
    /// Creates an empty table, rejecting duplicate header names.
    pub fn new(headers: Vec<String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(ModelError::DuplicateColumn(header.clone()));
            }
        }
        Ok(Self {
            headers,
            rows: Vec::new(),
        })
    }

    /// Table with the canonical core header and the given rows.
    pub fn with_core_columns(rows: Vec<FieldRow>) -> Self {
        Self {
            headers: columns::CORE.iter().map(|c| (*c).to_string()).collect(),
            rows,
        }
    }

    /// Header list exactly as read.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Header list for writing: original order, followed by any core column
    /// the input lacked so that engine output is never dropped.
    pub fn output_headers(&self) -> Vec<String> {
        let mut out = self.headers.clone();
        for core in columns::CORE {
            if !self.has_column(core) {
                out.push(core.to_string());
            }
        }
        out
    }

    /// Appends a row from cells aligned with the header list.
    pub fn push_cells<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.headers.len() {
            return Err(ModelError::RowWidth {
                expected: self.headers.len(),
                actual: cells.len(),
            });
        }
        let mut row = FieldRow::default();
        for (header, value) in self.headers.iter().zip(cells) {
            row.set(header, value);
        }
        self.rows.push(row);
        Ok(())
    }

    /// Cells of a row in `output_headers` order.
    pub fn record(&self, row: &FieldRow) -> Vec<String> {
        self.output_headers()
            .iter()
            .map(|h| row.get(h).unwrap_or_default().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a FieldTable {
    type Item = &'a FieldRow;
    type IntoIter = std::slice::Iter<'a, FieldRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
