//! Data model for field mapping tables.
//!
//! A mapping table enumerates source and target schema paths row by row.
//! The engines in `fieldmap-map` read a [`FieldTable`], propose target paths
//! for unmapped rows, and hand results to `fieldmap-report` for writing.

#![deny(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod options;
pub mod row;

pub use candidate::Candidate;
pub use error::{ModelError, Result};
pub use options::{InferenceOptions, ScaffoldOptions};
pub use row::{FieldRow, FieldTable, columns};
