//! Scanning of mapper sources for declarations that already exist.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IngestError, Result};

static MAPPING_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@Mapping\(\s*target\s*=\s*"([^"]+)""#).expect("valid declaration regex")
});

/// Target paths declared by `@Mapping(target = "...")` annotations in `path`.
pub fn declared_targets(path: &Path) -> Result<BTreeSet<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let targets = parse_declared_targets(&text);
    tracing::info!(
        path = %path.display(),
        declared = targets.len(),
        "scanned mapper declarations"
    );
    Ok(targets)
}

/// Target paths declared in mapper source text.
pub fn parse_declared_targets(text: &str) -> BTreeSet<String> {
    MAPPING_TARGET
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
