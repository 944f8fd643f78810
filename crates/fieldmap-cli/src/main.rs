//! Field mapping assistant CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use fieldmap_cli::commands::{run_infer, run_rank, run_scaffold};
use fieldmap_cli::logging::{LogConfig, LogFormat, init_logging};
use fieldmap_model::{InferenceOptions, ScaffoldOptions};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, EngineArgs, LogFormatArg, LogLevelArg};
use crate::summary::{print_infer_summary, print_rank_summary, print_scaffold};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Infer(args) => {
            let options = inference_options(&args.engine);
            match run_infer(&args.input, args.output.as_deref(), &options) {
                Ok(result) => {
                    print_infer_summary(&result, &options);
                    0
                }
                Err(error) => report_error(&error),
            }
        }
        Command::Rank(args) => {
            let options = inference_options(&args.engine);
            match run_rank(&args.input, args.output.as_deref(), &options) {
                Ok(result) => {
                    print_rank_summary(&result, &options);
                    0
                }
                Err(error) => report_error(&error),
            }
        }
        Command::Scaffold(args) => {
            let mut options = ScaffoldOptions::new(args.prefix)
                .with_priority(args.priority)
                .with_max_depth(args.max_depth)
                .with_limit(args.limit);
            if let Some(root) = args.list_root {
                options = options.with_list_root(root);
            }
            match run_scaffold(&args.input, args.mapper.as_deref(), &options) {
                Ok(result) => {
                    print_scaffold(&result);
                    0
                }
                Err(error) => report_error(&error),
            }
        }
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

fn inference_options(args: &EngineArgs) -> InferenceOptions {
    let options = InferenceOptions::new().with_max_suffix_len(args.max_suffix_len);
    match args.sample_limit {
        Some(limit) => options.with_sample_limit(limit),
        None => options,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
