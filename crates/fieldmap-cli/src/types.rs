use std::path::PathBuf;

use fieldmap_map::{Declaration, InferenceReport, Ranking};

/// Output of the `infer` command.
#[derive(Debug)]
pub struct InferResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: InferenceReport,
}

/// Output of the `rank` command.
#[derive(Debug)]
pub struct RankResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub ranking: Ranking,
}

/// Output of the `scaffold` command.
#[derive(Debug)]
pub struct ScaffoldResult {
    pub input: PathBuf,
    /// Targets already declared by the mapper, if one was given.
    pub declared: usize,
    pub declarations: Vec<Declaration>,
}
