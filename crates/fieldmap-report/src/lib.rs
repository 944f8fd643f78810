//! Report generation for mapping inference results.
//!
//! - **Field table**: the input table with inferred rows filled in, every
//!   original column preserved
//! - **Candidate table**: one row per ranked source→target candidate

mod candidates;
mod field_table;

pub use candidates::{CANDIDATE_COLUMNS, write_candidates, write_candidates_to};
pub use field_table::{write_field_table, write_field_table_to};

use std::path::Path;

use anyhow::{Context, Result};

/// Create the parent directory of an output file if needed.
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
