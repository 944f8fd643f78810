//! Heuristic scoring for source→target candidates.
//!
//! Scores are additive integer points. Suffix matches start from ten points
//! per matched segment and are adjusted for list shape, type equality, the
//! amount/address mismatch and identifier-looking targets. Fallback matches
//! start low and convert to confidence with a steeper multiplier.

use crate::path::{amount_address_mismatch, is_list_path, simple_type};
use crate::patterns::{FALLBACK_BONUS_KEYWORDS, IDENTIFIER_PATH_KEYWORDS, contains_any};

const POINTS_PER_SEGMENT: i32 = 10;
const LIST_SHAPE_MATCH: i32 = 5;
const LIST_SHAPE_MISMATCH: i32 = -3;
const TYPE_MATCH: i32 = 8;
const AMOUNT_ADDRESS_PENALTY: i32 = -20;
const IDENTIFIER_PATH_BONUS: i32 = 3;
const SUFFIX_CONFIDENCE_MULTIPLIER: u32 = 4;

const FALLBACK_BASE: i32 = 3;
const FALLBACK_ID_LIKE: i32 = 4;
const FALLBACK_KEYWORD_BONUS: i32 = 2;
const FALLBACK_AMOUNT_ADDRESS_PENALTY: i32 = -10;
const FALLBACK_CONFIDENCE_MULTIPLIER: u32 = 6;

const MAX_CONFIDENCE: u32 = 100;

/// A component contributing to the final score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreComponent {
    /// Component name (e.g., "Suffix match").
    pub name: &'static str,
    /// Points added (negative for penalties).
    pub value: i32,
    /// Human-readable description.
    pub description: String,
}

/// Score for a single source→target pair, with its breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateScore {
    components: Vec<ScoreComponent>,
    confidence_multiplier: u32,
}

/// Inputs for scoring a suffix-index match.
#[derive(Debug, Clone, Copy)]
pub struct SuffixMatch<'a> {
    pub suffix_len: usize,
    pub source_path: &'a str,
    pub source_type: &'a str,
    pub target_path: &'a str,
    pub target_type: &'a str,
}

impl CandidateScore {
    /// Scores a candidate found through the suffix index.
    pub fn suffix_match(m: &SuffixMatch<'_>) -> Self {
        let mut components = Vec::with_capacity(5);

        let segments = i32::try_from(m.suffix_len).unwrap_or(i32::MAX / POINTS_PER_SEGMENT);
        components.push(ScoreComponent {
            name: "Suffix match",
            value: segments * POINTS_PER_SEGMENT,
            description: format!("{} trailing segment(s) match", m.suffix_len),
        });

        let source_list = is_list_path(m.source_path);
        let target_list = is_list_path(m.target_path);
        if source_list == target_list {
            components.push(ScoreComponent {
                name: "List shape",
                value: LIST_SHAPE_MATCH,
                description: "Both sides have the same list shape".into(),
            });
        } else {
            components.push(ScoreComponent {
                name: "List shape mismatch",
                value: LIST_SHAPE_MISMATCH,
                description: if source_list {
                    "Source is repeated, target is not".into()
                } else {
                    "Target is repeated, source is not".into()
                },
            });
        }

        let source_simple = simple_type(m.source_type);
        let target_simple = simple_type(m.target_type);
        if !source_simple.is_empty() && source_simple == target_simple {
            components.push(ScoreComponent {
                name: "Type match",
                value: TYPE_MATCH,
                description: format!("Both types are '{source_simple}'"),
            });
        }

        if amount_address_mismatch(m.source_type, m.target_type) {
            components.push(ScoreComponent {
                name: "Amount/address mismatch",
                value: AMOUNT_ADDRESS_PENALTY,
                description: format!("'{source_simple}' vs '{target_simple}'"),
            });
        }

        if contains_any(&m.target_path.to_lowercase(), IDENTIFIER_PATH_KEYWORDS) {
            components.push(ScoreComponent {
                name: "Identifier path",
                value: IDENTIFIER_PATH_BONUS,
                description: "Target path names an identifier".into(),
            });
        }

        Self {
            components,
            confidence_multiplier: SUFFIX_CONFIDENCE_MULTIPLIER,
        }
    }

    /// Scores a candidate found by the identifier fallback search.
    ///
    /// `target_key` is the lowercased, normalized target path joined by `.`.
    pub fn fallback(source_type: &str, target_key: &str, target_type: &str) -> Self {
        let mut components = vec![
            ScoreComponent {
                name: "Fallback",
                value: FALLBACK_BASE,
                description: "No suffix match; identifier fallback".into(),
            },
            ScoreComponent {
                name: "Identifier on both sides",
                value: FALLBACK_ID_LIKE,
                description: "Source and target both look like identifiers".into(),
            },
        ];

        if contains_any(target_key, FALLBACK_BONUS_KEYWORDS) {
            components.push(ScoreComponent {
                name: "Institution identifier",
                value: FALLBACK_KEYWORD_BONUS,
                description: "Target is a branch or financial-institution identifier".into(),
            });
        }

        if amount_address_mismatch(source_type, target_type) {
            components.push(ScoreComponent {
                name: "Amount/address mismatch",
                value: FALLBACK_AMOUNT_ADDRESS_PENALTY,
                description: format!(
                    "'{}' vs '{}'",
                    simple_type(source_type),
                    simple_type(target_type)
                ),
            });
        }

        Self {
            components,
            confidence_multiplier: FALLBACK_CONFIDENCE_MULTIPLIER,
        }
    }

    /// Sum of all components before clamping.
    pub fn raw(&self) -> i32 {
        self.components.iter().map(|c| c.value).sum()
    }

    /// Score clamped at zero.
    pub fn value(&self) -> i32 {
        self.raw().max(0)
    }

    /// Display confidence in 0..=100.
    pub fn confidence(&self) -> u32 {
        let value = u32::try_from(self.value()).unwrap_or(0);
        value
            .saturating_mul(self.confidence_multiplier)
            .min(MAX_CONFIDENCE)
    }

    pub fn components(&self) -> &[ScoreComponent] {
        &self.components
    }

    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.components
            .iter()
            .map(|c| format!("{}: {:+}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
