//! CLI entrypoint for the hanseg Korean segmentation tool.
//!
//! The binary delegates to [`hanseg_cli::run`], which parses arguments,
//! initialises logging, drives the analyzer session and renders the
//! surviving morphemes.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    hanseg_cli::run(std::env::args_os(), &mut stdout)
}
