//! Keyword lists used by the scoring heuristics.
//!
//! All lists are lowercase and matched as substrings of lowercased text.

/// Simple type names that look like monetary amounts.
pub const AMOUNT_KEYWORDS: &[&str] = &["amt", "amount", "currency", "decimal"];

/// Simple type names that look like postal addresses.
pub const ADDRESS_KEYWORDS: &[&str] = &["addr", "postal", "adr"];

/// Target paths carrying an explicit identifier earn a small bonus.
pub const IDENTIFIER_PATH_KEYWORDS: &[&str] = &["id", "tax", "bic", "be", "duns", "ean"];

/// Final source segments eligible for the identifier fallback search.
pub const FALLBACK_SOURCE_KEYWORDS: &[&str] =
    &["id", "orgid", "prvtid", "othrid", "taxid", "psptnb"];

/// Branch and financial-institution identifier structures a fallback target
/// path must mention.
pub const FALLBACK_TARGET_KEYWORDS: &[&str] = &[
    "brnchid",
    "brnchid.id",
    "fininstn",
    "fininstnid",
    "cmbndid",
    "prtryid",
    "bic",
];

/// Fallback targets mentioning one of these earn a small bonus.
pub const FALLBACK_BONUS_KEYWORDS: &[&str] = &["brnch", "fininstn", "bic"];

/// The final segment of a fallback target must contain this.
pub const ID_MARKER: &str = "id";

/// True when `haystack` contains any of `keywords`.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
