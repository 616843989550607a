//! Scopediff: attribute the lines of a unified diff to the classes, methods,
//! and functions that contain them.
//!
//! This is the main entry point for the `scopediff` CLI. It parses arguments,
//! runs the analysis, and handles errors with proper exit codes.

mod analysis;
mod boundary;
mod cli;
mod commands;
mod config;
mod diff;
mod error;
mod exit_codes;
mod git;
mod index;
mod lang;
mod logging;
mod reconcile;
mod render;
mod source;
mod structure;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
