//! Audit report mapper CLI.

use clap::{ColorChoice, Parser};
use rmap_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_columns, run_map};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match cli.command {
        Command::Map(args) => run_map(&args).map(|result| print_summary(&result)),
        Command::Columns(args) => run_columns(args.format),
    };
    if let Err(error) = outcome {
        error!(error = %format!("{error:#}"), "run failed");
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// An explicit `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let to_file = cli.log_file.is_some();
    LogConfig {
        level_filter: explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !to_file && io::stderr().is_terminal(),
        },
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmap_cli::logging::LogFormat;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        log_config_from_cli(&cli)
    }

    #[test]
    fn test_defaults_defer_to_rust_log() {
        let config = config_for(&["report-mapper", "columns"]);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_explicit_level_beats_verbosity() {
        let config = config_for(&["report-mapper", "-v", "--log-level", "error", "columns"]);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_verbose_flag_disables_rust_log() {
        let config = config_for(&["report-mapper", "-v", "columns"]);
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_log_file_turns_off_auto_color() {
        let config = config_for(&[
            "report-mapper",
            "--log-format",
            "json",
            "--log-file",
            "run.log",
            "columns",
        ]);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
        assert_eq!(config.log_file, Some(std::path::PathBuf::from("run.log")));
    }
}
