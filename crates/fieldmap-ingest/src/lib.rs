//! Loading of mapping tables and existing mapper sources.
//!
//! - [`load_field_table`] reads the flattened source/target path table.
//! - [`declared_targets`] collects target paths already declared in a mapper
//!   source file so scaffolding does not suggest them twice.

#![deny(unsafe_code)]

pub mod declarations;
pub mod error;
pub mod table;

pub use declarations::{declared_targets, parse_declared_targets};
pub use error::{IngestError, Result};
pub use table::{load_field_table, read_field_table};
