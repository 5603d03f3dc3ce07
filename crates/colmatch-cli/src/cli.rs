//! CLI argument definitions for the column matcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colmatch",
    version,
    about = "Match spreadsheet columns onto template fields",
    long_about = "Match the columns of an already-decoded table onto a template field catalog.\n\n\
                  Reads a JSON session fixture (rows, header row, fields, config and a list of\n\
                  user actions), replays the actions and reports the resulting column set and\n\
                  any required fields left unmatched."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include raw cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a session fixture and report the resulting column set.
    Match(MatchArgs),

    /// List the fields of a session fixture.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Path to the JSON session fixture.
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Bind columns whose header spells a field before replaying actions.
    #[arg(long = "auto-match")]
    pub auto_match: bool,

    /// Allow continuing with unmatched required fields (overrides the fixture config).
    #[arg(long = "allow-invalid-submit")]
    pub allow_invalid_submit: bool,

    /// Answer "continue" to the unmatched-fields confirmation.
    ///
    /// Only has an effect when invalid submits are allowed.
    #[arg(long = "accept-unmatched")]
    pub accept_unmatched: bool,

    /// Scan at most this many data rows for distinct select values.
    #[arg(long = "sample-rows", value_name = "N")]
    pub sample_rows: Option<usize>,

    /// Print the column set and decision as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Path to the JSON session fixture.
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,
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
