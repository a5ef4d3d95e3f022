//! CLI argument definitions for the report mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use rmap_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "report-mapper",
    version,
    about = "Audit report mapper - Convert an audit export to the report layout",
    long_about = "Convert an audits basic data export (CSV) into the report layout.\n\n\
                  Drops the internal test site, normalizes visit dates and times,\n\
                  derives the visit month, orders rows by result, and writes a\n\
                  spreadsheet-friendly UTF-8 CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
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
    /// Transform an export into the report layout.
    Map(MapArgs),

    /// List the report columns and where each one comes from.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the exported CSV (e.g. audits_basic_data_export.csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: "Deliveroo Report Data.csv" next to INPUT).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Additional site id to drop (repeatable).
    #[arg(long = "exclude-site", value_name = "SITE_ID")]
    pub exclude_sites: Vec<String>,

    /// Do not drop the built-in excluded test site.
    #[arg(long = "no-default-exclusion")]
    pub no_default_exclusion: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Run the transform and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Listing format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ColumnsFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColumnsFormatArg {
    Table,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
