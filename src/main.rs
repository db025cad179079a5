//! CLI entry point for the map tile stitcher

use clap::Parser;
use mapstitch::io::cli::{Cli, FileProcessor};
use std::process::ExitCode;

// Allow print for user-facing error reporting
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests land here too and are not failures
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let mut processor = FileProcessor::new(cli);
    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
