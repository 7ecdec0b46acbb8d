//! CLI argument definitions for the Secret Santa matcher.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use santa_ingest::{HeaderMode, IngestOptions};
use santa_model::DEFAULT_MAX_ATTEMPTS;
use santa_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "secret-santa",
    version,
    about = "Secret Santa - Assign gift recipients from a CSV roster",
    long_about = "Assign every participant a gift recipient from the same roster.\n\n\
                  Nobody draws themselves, and nobody draws the recipient they had\n\
                  in the previous round when that round's CSV is supplied.\n\
                  The output CSV can be passed back in as --history next time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow participant emails to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a new round of assignments.
    Assign(AssignArgs),

    /// Load and validate the inputs without drawing.
    Check(CheckArgs),

    /// Check an existing assignment file against the roster and history.
    Verify(VerifyArgs),
}

/// Input files shared by every command.
#[derive(Args)]
pub struct InputArgs {
    /// Roster CSV (name, email, ...).
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Previous round's assignment CSV; its pairs are not repeated.
    #[arg(long = "history", value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// How to treat the first row of each CSV.
    #[arg(long = "header", value_enum, default_value = "auto")]
    pub header: HeaderArg,
}

impl InputArgs {
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default().with_header(self.header.into())
    }
}

#[derive(Parser)]
pub struct AssignArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: SecretSantaAssignments.<format> in the current directory).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format to write.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Seed for the shuffle; the same seed and inputs give the same draw.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Number of shuffles to try before giving up.
    #[arg(long = "max-attempts", value_name = "N", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Draw and print without writing an output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not print the assignment table.
    ///
    /// Useful when the organiser should not see who drew whom.
    #[arg(long = "no-table")]
    pub no_table: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Parser)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Assignment CSV to check.
    #[arg(long = "assignments", value_name = "FILE")]
    pub assignments: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HeaderArg {
    Auto,
    Present,
    Absent,
}

impl From<HeaderArg> for HeaderMode {
    fn from(value: HeaderArg) -> Self {
        match value {
            HeaderArg::Auto => HeaderMode::Auto,
            HeaderArg::Present => HeaderMode::Present,
            HeaderArg::Absent => HeaderMode::Absent,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
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
