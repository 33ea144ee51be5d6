//! CLI argument definitions for the mapping resolver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "formmap",
    version,
    about = "PDF form-field mapping resolver",
    long_about = "Reconcile logical application form fields against the raw field\n\
                  identifiers of a PDF document: resolve a mapping table, measure\n\
                  its coverage, and triage the gaps."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a mapping table from a field list and form source.
    Resolve(ResolveArgs),

    /// Recompute coverage and suggestions for an existing mapping table.
    Analyze(AnalyzeArgs),

    /// List the physical fields reported by PDF inspection.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// JSON field list produced by the PDF inspection step.
    #[arg(value_name = "FIELDS_JSON")]
    pub fields: PathBuf,

    /// Application form source to scan for field bindings.
    #[arg(value_name = "FORM_SOURCE")]
    pub form_source: PathBuf,

    /// Override configuration (renames, manual entries, extra fields).
    #[arg(long = "overrides", value_name = "PATH")]
    pub overrides: Option<PathBuf>,

    /// Write the resolved mapping table to this JSON file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Persist the resolved table in a mapping repository directory.
    #[arg(long = "repo", value_name = "DIR", requires = "form_id")]
    pub repo: Option<PathBuf>,

    /// Form identifier used when persisting to the repository.
    #[arg(long = "form-id", value_name = "ID")]
    pub form_id: Option<String>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// JSON field list produced by the PDF inspection step.
    #[arg(value_name = "FIELDS_JSON")]
    pub fields: PathBuf,

    /// Serialized mapping table (possibly hand-edited) to reconcile.
    #[arg(value_name = "MAPPING_JSON")]
    pub mapping: PathBuf,

    /// Custom suggestion rules (JSON; absent keys keep their defaults).
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// JSON field list produced by the PDF inspection step.
    #[arg(value_name = "FIELDS_JSON")]
    pub fields: PathBuf,
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
