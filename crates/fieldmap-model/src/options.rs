//! Configuration options for the inference engines.

/// Longest target-path suffix indexed and probed.
pub const DEFAULT_MAX_SUFFIX_LEN: usize = 6;
/// Strategy label written into rows resolved by the strict engine.
pub const DEFAULT_STRATEGY_LABEL: &str = "heuristic-multisuffix-type";

/// Options shared by the strict engine and the relaxed ranker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceOptions {
    /// Longest suffix length (in segments) indexed and probed.
    pub max_suffix_len: usize,
    /// Value written to `mappingStrategy` for inferred rows.
    pub strategy_label: String,
    /// Number of inferred pairs printed by the strict report.
    pub sample_limit: usize,
    /// Number of distinct candidate pairs printed by the relaxed report.
    pub top_candidates: usize,
    /// Number of best-per-source candidates printed by the relaxed report.
    pub top_best: usize,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            max_suffix_len: DEFAULT_MAX_SUFFIX_LEN,
            strategy_label: DEFAULT_STRATEGY_LABEL.to_string(),
            sample_limit: 50,
            top_candidates: 80,
            top_best: 60,
        }
    }
}

impl InferenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum suffix length. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_suffix_len(mut self, len: usize) -> Self {
        self.max_suffix_len = len.max(1);
        self
    }

    #[must_use]
    pub fn with_strategy_label(mut self, label: impl Into<String>) -> Self {
        self.strategy_label = label.into();
        self
    }

    /// Apply the same cap to every console sample list.
    #[must_use]
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self.top_candidates = limit;
        self.top_best = limit;
        self
    }
}

/// Options for generating mapping declaration scaffolds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Source path prefix that selects rows and is stripped from them.
    pub prefix: String,
    /// Repeated root element stripped after the prefix, with or without `[]`.
    pub list_root: Option<String>,
    /// Relative paths with more dots than this are skipped.
    pub max_depth: usize,
    /// Maximum number of declarations emitted.
    pub limit: usize,
    /// Relative paths emitted first, in order.
    pub priority: Vec<String>,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            list_root: None,
            max_depth: 3,
            limit: 20,
            priority: Vec::new(),
        }
    }
}

impl ScaffoldOptions {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_list_root(mut self, root: impl Into<String>) -> Self {
        self.list_root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Vec<String>) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
