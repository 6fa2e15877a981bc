//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "casebook",
    version,
    about = "Render clinical case summaries from JSON to Word documents",
    long_about = "Render structured clinical case records from a JSON file into\n\
                  formatted Word (.docx) case summaries. A single record object\n\
                  produces one summary; a record sequence (or --all) produces one\n\
                  paginated document sorted by field and case number."
)]
pub struct Cli {
    /// Path to the case JSON file (one record object or a sequence).
    #[arg(value_name = "INPUT_JSON")]
    pub input: PathBuf,

    /// Force batch output even when the JSON root is a single record.
    #[arg(long = "all")]
    pub all: bool,

    /// Directory for the generated document (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Apply terminology rules from a JSON rule file before rendering.
    #[arg(long = "term-rules", value_name = "PATH")]
    pub term_rules: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
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
