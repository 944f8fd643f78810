//! Path and type name normalization.

use crate::patterns::{ADDRESS_KEYWORDS, AMOUNT_KEYWORDS, contains_any};

/// Marker that denotes a repeated (list-valued) segment.
pub const LIST_MARKER: &str = "[]";

/// Splits a dotted path into bare segment names.
///
/// List markers are removed, segments are trimmed and empty segments are
/// dropped, so `"a.b[].c"` becomes `["a", "b", "c"]`.
pub fn normalize_path(path: &str) -> Vec<String> {
    path.split('.')
        .map(|segment| segment.replace(LIST_MARKER, "").trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// True when the raw path carries a list marker anywhere.
pub fn is_list_path(path: &str) -> bool {
    path.contains(LIST_MARKER)
}

/// Reduces a declared type to its simple name.
///
/// Generic types keep their last (innermost) type argument, and qualified
/// names keep their final dot component: `List<foo.Bar>` gives `Bar`.
pub fn simple_type(type_name: &str) -> &str {
    let trimmed = type_name.trim();
    if let (Some(open), Some(close)) = (trimmed.find('<'), trimmed.rfind('>'))
        && open < close
        && let Some(last) = trimmed[open + 1..close]
            .split(['<', '>', ','])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .last()
    {
        return last_component(last);
    }
    last_component(trimmed)
}

fn last_component(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Whether the type's simple name looks like a monetary amount.
pub fn looks_like_amount(type_name: &str) -> bool {
    contains_any(&simple_type(type_name).to_lowercase(), AMOUNT_KEYWORDS)
}

/// Whether the type's simple name looks like a postal address.
pub fn looks_like_address(type_name: &str) -> bool {
    contains_any(&simple_type(type_name).to_lowercase(), ADDRESS_KEYWORDS)
}

/// True when one type looks like an amount and the other like an address.
pub fn amount_address_mismatch(source_type: &str, target_type: &str) -> bool {
    (looks_like_amount(source_type) && looks_like_address(target_type))
        || (looks_like_address(source_type) && looks_like_amount(target_type))
}
