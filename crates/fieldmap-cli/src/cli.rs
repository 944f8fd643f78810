//! CLI argument definitions for the field mapping assistant.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fieldmap_model::options::DEFAULT_MAX_SUFFIX_LEN;

#[derive(Parser)]
#[command(
    name = "fieldmap",
    version,
    about = "Infer source-to-target field mappings from path suffixes",
    long_about = "Fill in unmapped rows of a field mapping matrix.\n\n\
                  `infer` commits only unambiguous suffix matches, `rank` lists \
                  scored candidates for manual review, and `scaffold` prints \
                  ready-to-paste mapping declarations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fill unambiguous targets and write the updated matrix.
    Infer(InferArgs),

    /// Write every scored candidate for unmapped rows.
    Rank(RankArgs),

    /// Print mapping declarations for not-started fields.
    Scaffold(ScaffoldArgs),
}

/// Engine tuning shared by `infer` and `rank`.
#[derive(Args)]
pub struct EngineArgs {
    /// Longest path suffix (in segments) used for matching.
    #[arg(long = "max-suffix-len", value_name = "N", default_value_t = DEFAULT_MAX_SUFFIX_LEN)]
    pub max_suffix_len: usize,

    /// Number of sample lines printed after the summary.
    #[arg(long = "sample-limit", value_name = "N")]
    pub sample_limit: Option<usize>,
}

#[derive(Parser)]
pub struct InferArgs {
    /// Mapping matrix CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV (default: <INPUT dir>/mapping_matrix_inferred.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Mapping matrix CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV (default: <INPUT dir>/mapping_matrix_candidates_relaxed.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Parser)]
pub struct ScaffoldArgs {
    /// Mapping matrix CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Source path prefix to select and strip (e.g. `pacs008.`).
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: String,

    /// Repeated root element stripped after the prefix.
    #[arg(long = "list-root", value_name = "NAME")]
    pub list_root: Option<String>,

    /// Mapper source file; targets it already declares are skipped.
    #[arg(long = "mapper", value_name = "FILE")]
    pub mapper: Option<PathBuf>,

    /// Relative path to emit first (repeatable).
    #[arg(long = "priority", value_name = "PATH")]
    pub priority: Vec<String>,

    /// Skip relative paths with more dots than this.
    #[arg(long = "max-depth", value_name = "N", default_value_t = 3)]
    pub max_depth: usize,

    /// Maximum number of declarations printed.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
