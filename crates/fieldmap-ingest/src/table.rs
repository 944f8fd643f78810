//! CSV loading for the mapping table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use fieldmap_model::{FieldTable, columns};

use crate::error::{IngestError, Result};

/// Reads a mapping table CSV from disk.
///
/// The header list is kept in file order so the table can be written back
/// with every original column. `sourcePath` and `targetPath` must be present.
pub fn load_field_table(path: &Path) -> Result<FieldTable> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let table = read_field_table(file, path)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "loaded mapping table"
    );
    Ok(table)
}

/// Reads a mapping table from any reader; `path` is used for error context.
pub fn read_field_table<R: Read>(reader: R, path: &Path) -> Result<FieldTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn {
                column: required.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let unknown: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|h| !columns::is_core(h))
        .collect();
    if !unknown.is_empty() {
        tracing::debug!(columns = ?unknown, "passing through non-core columns");
    }

    let mut table = FieldTable::new(headers).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })?;

    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        table
            .push_cells(record.iter())
            .map_err(|source| IngestError::Table {
                path: path.to_path_buf(),
                source,
            })?;
    }

    Ok(table)
}
