//! Declaration scaffolding for a mapper that is being filled in by hand.
//!
//! Lists not-started source fields below a prefix as ready-to-paste
//! `@Mapping` declarations, skipping targets the mapper already declares.

use std::collections::BTreeSet;
use std::fmt;

use fieldmap_model::{FieldTable, ScaffoldOptions};

/// One suggested mapping declaration with identical source and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Path relative to the prefix and list root.
    pub path: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@Mapping(target = \"{}\", source = \"{}\")",
            self.path, self.path
        )
    }
}

/// Builds up to `options.limit` declarations.
///
/// Priority paths come first (unless already declared), followed by the
/// remaining eligible rows in table order.
pub fn scaffold(
    table: &FieldTable,
    options: &ScaffoldOptions,
    declared: &BTreeSet<String>,
) -> Vec<Declaration> {
    let mut out: Vec<String> = options
        .priority
        .iter()
        .filter(|p| !declared.contains(p.as_str()))
        .cloned()
        .collect();

    for row in table {
        if !row.is_not_started() {
            continue;
        }
        let Some(relative) = relative_path(row.source_path_trimmed(), options) else {
            continue;
        };
        if declared.contains(relative) {
            continue;
        }
        if relative.matches('.').count() > options.max_depth {
            continue;
        }
        if !out.iter().any(|p| p == relative) {
            out.push(relative.to_string());
        }
    }

    out.truncate(options.limit);
    tracing::debug!(
        declarations = out.len(),
        declared = declared.len(),
        "scaffolded declarations"
    );
    out.into_iter().map(|path| Declaration { path }).collect()
}

/// Strips the prefix and list root from a source path.
fn relative_path<'a>(source: &'a str, options: &ScaffoldOptions) -> Option<&'a str> {
    let relative = source.strip_prefix(options.prefix.as_str())?;
    let Some(root) = options.list_root.as_deref() else {
        return Some(relative);
    };
    if !relative.starts_with(root) {
        return None;
    }
    let rest = &relative[root.len()..];
    Some(
        rest.strip_prefix("[].")
            .or_else(|| rest.strip_prefix('.'))
            .unwrap_or(relative),
    )
}

#[cfg(test)]
mod tests {
    use fieldmap_model::FieldRow;

    use super::*;

    fn row(source: &str, status: &str) -> FieldRow {
        FieldRow::source(source, "").with_status(status)
    }

    fn table() -> FieldTable {
        FieldTable::with_core_columns(vec![
            row("pacs.cdtTrfTxInf[].instdAmt", "not-started"),
            row("pacs.cdtTrfTxInf[].chrgBr", "not-started"),
            row("pacs.cdtTrfTxInf[].dbtr.nm", "done"),
            row("pacs.cdtTrfTxInf.purp.cd", "not-started"),
            row("pacs.cdtTrfTxInf[].a.b.c.d.e", "not-started"),
            row("pacs.grpHdr.msgId", "not-started"),
            row("other.cdtTrfTxInf[].x", "not-started"),
        ])
    }

    fn options() -> ScaffoldOptions {
        ScaffoldOptions::new("pacs.").with_list_root("cdtTrfTxInf")
    }

    fn paths(decls: &[Declaration]) -> Vec<&str> {
        decls.iter().map(|d| d.path.as_str()).collect()
    }

    #[test]
    fn selects_not_started_rows_under_the_root() {
        let decls = scaffold(&table(), &options(), &BTreeSet::new());
        assert_eq!(paths(&decls), vec!["instdAmt", "chrgBr", "purp.cd"]);
    }

    #[test]
    fn skips_declared_targets_and_puts_priority_first() {
        let declared: BTreeSet<String> = ["instdAmt".to_string(), "rmtInf".to_string()].into();
        let opts = options().with_priority(vec![
            "rmtInf".to_string(),
            "purp.cd".to_string(),
            "poolgAdjstmntDt".to_string(),
        ]);
        let decls = scaffold(&table(), &opts, &declared);
        assert_eq!(paths(&decls), vec!["purp.cd", "poolgAdjstmntDt", "chrgBr"]);
    }

    #[test]
    fn depth_and_limit() {
        let decls = scaffold(
            &table(),
            &options().with_max_depth(10).with_limit(2),
            &BTreeSet::new(),
        );
        assert_eq!(paths(&decls), vec!["instdAmt", "chrgBr"]);

        let decls = scaffold(&table(), &options().with_max_depth(10), &BTreeSet::new());
        assert!(paths(&decls).contains(&"a.b.c.d.e"));
    }

    #[test]
    fn renders_mapping_annotation() {
        let decl = Declaration {
            path: "dbtr.nm".to_string(),
        };
        assert_eq!(
            decl.to_string(),
            r#"@Mapping(target = "dbtr.nm", source = "dbtr.nm")"#
        );
    }

    #[test]
    fn prefix_only_keeps_full_relative_path() {
        let decls = scaffold(&table(), &ScaffoldOptions::new("pacs."), &BTreeSet::new());
        assert_eq!(
            paths(&decls),
            vec![
                "cdtTrfTxInf[].instdAmt",
                "cdtTrfTxInf[].chrgBr",
                "cdtTrfTxInf.purp.cd",
                "grpHdr.msgId",
            ]
        );
    }
}
