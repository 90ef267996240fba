//! CLI argument definitions for the hanseg tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output rendering for segmentation results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One `surface<TAB>pos` line per morpheme.
    #[default]
    Human,
    /// One JSON array of morpheme records per sentence.
    Json,
}

/// Korean morphological segmentation over a bundled MeCab analyzer.
#[derive(Parser, Debug)]
#[command(name = "hanseg", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Analyzer installation root (binary, dictionaries, shared libraries).
    #[arg(long, value_name = "DIR")]
    pub(crate) support_dir: PathBuf,
    /// Controls how morphemes are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub(crate) format: OutputFormat,
    /// Tracing filter, for example `debug` or `hanseg_host=trace`.
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub(crate) log_filter: String,
    /// Sentence to segment; sentences are read line-by-line from stdin
    /// when omitted.
    #[arg(value_name = "TEXT")]
    pub(crate) text: Option<String>,
}
