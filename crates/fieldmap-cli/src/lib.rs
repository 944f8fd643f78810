//! CLI library components for the field mapping assistant.

pub mod commands;
pub mod logging;
pub mod types;
