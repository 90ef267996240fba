//! Command-line runtime for the hanseg Korean segmentation tool.
//!
//! The module owns argument parsing, logging initialisation and the
//! analyze-and-render loop. [`run`] takes the argument iterator and the
//! output writer so tests can exercise the runtime without spawning the
//! binary.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use hanseg_host::{Analyzer, AnalyzerError, MecabAnalyzer, Morpheme};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, OutputFormat};

/// Log target for CLI operations.
const CLI_TARGET: &str = "hanseg_cli";

/// Failures surfaced to the operator with a non-zero exit code.
#[derive(Debug, Error)]
enum CliError {
    #[error("analyzer failure: {0}")]
    Analyzer(#[from] AnalyzerError),
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
    #[error("failed to render morphemes: {0}")]
    Render(#[from] serde_json::Error),
}

/// Parses `args`, runs the requested analysis and writes results to `out`.
pub fn run<I, T, W>(args: I, out: &mut W) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(2));
        }
    };

    init_logging(&cli.log_filter);

    match execute(&cli, out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("hanseg: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; the `--log-filter` value is the
/// fallback. A second installation (as happens under the test harness)
/// is ignored.
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Starts one analyzer session and segments the requested input.
fn execute(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut analyzer = MecabAnalyzer::new(&cli.support_dir);
    debug!(
        target: CLI_TARGET,
        analyzer = analyzer.name(),
        command = %analyzer.config().command.display(),
        "starting session"
    );
    analyzer.start()?;

    let result = segment_all(&mut analyzer, cli, out);
    analyzer.dispose();
    result
}

/// Segments the positional sentence, or stdin line-by-line without one.
fn segment_all(
    analyzer: &mut MecabAnalyzer,
    cli: &Cli,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if let Some(text) = &cli.text {
        let morphemes = analyzer.analyze(text)?;
        return emit(out, cli.format, &morphemes);
    }

    for line in io::stdin().lock().lines() {
        let morphemes = analyzer.analyze(&line?)?;
        emit(out, cli.format, &morphemes)?;
    }
    Ok(())
}

/// Writes one sentence's morphemes in the selected format.
fn emit(out: &mut impl Write, format: OutputFormat, morphemes: &[Morpheme]) -> Result<(), CliError> {
    let rendered = render(format, morphemes)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Renders morphemes as `surface<TAB>pos` lines or a JSON array.
fn render(format: OutputFormat, morphemes: &[Morpheme]) -> Result<String, CliError> {
    match format {
        OutputFormat::Human => {
            let mut rendered = String::new();
            for morpheme in morphemes {
                rendered.push_str(&morpheme.surface);
                rendered.push('\t');
                rendered.push_str(&morpheme.pos);
                rendered.push('\n');
            }
            Ok(rendered)
        }
        OutputFormat::Json => {
            let mut rendered = serde_json::to_string(morphemes)?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
