//! CLI argument definitions for the trial registry parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ctnlp",
    version,
    about = "Parse ClinicalTrials.gov study XML and TREC/CSIRO patient topics",
    long_about = "Parse ClinicalTrials.gov study XML and TREC/CSIRO patient topics.\n\n\
                  Splits free-text eligibility criteria into inclusion and exclusion\n\
                  statements and normalizes ages, gender and healthy-volunteer fields."
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

    /// JSON file overriding the criteria section headers.
    ///
    /// Keys: "inclusion", "exclusion", "expected_preambles". Missing keys
    /// keep their built-in lists.
    #[arg(long = "headers", value_name = "PATH", global = true)]
    pub headers: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse every study XML file under a folder.
    Trials(TrialsArgs),

    /// Load patient descriptions from a topic file.
    Patients(PatientsArgs),

    /// Split a raw criteria text file into inclusion and exclusion statements.
    Criteria(CriteriaArgs),
}

#[derive(Parser)]
pub struct TrialsArgs {
    /// Folder searched recursively for *.xml study files.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Only parse the first N files (in sorted path order).
    #[arg(long = "first-n", value_name = "N")]
    pub first_n: Option<usize>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct PatientsArgs {
    /// Topic XML file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Topic file layout: TREC or CSIRO.
    #[arg(long = "input-type", value_name = "TYPE", default_value = "TREC")]
    pub input_type: String,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct CriteriaArgs {
    /// Text file holding a criteria block.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
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
