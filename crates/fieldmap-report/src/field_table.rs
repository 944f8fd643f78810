//! Field table CSV output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use fieldmap_model::FieldTable;

use crate::ensure_parent;

/// Write the table to `path`, replacing any existing file.
pub fn write_field_table(path: &Path, table: &FieldTable) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_field_table_to(file, table).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = table.len(), "wrote field table");
    Ok(())
}

/// Write the table as CSV to any writer.
///
/// Columns follow the table's original header order; core columns missing
/// from the input are appended.
pub fn write_field_table_to<W: Write>(writer: W, table: &FieldTable) -> Result<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(table.output_headers())
        .context("write header")?;
    for row in table {
        csv.write_record(table.record(row)).context("write row")?;
    }
    csv.flush().context("flush field table")?;
    Ok(())
}
