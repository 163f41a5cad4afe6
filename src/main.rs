//! Binary entry point for briefly-rs.
//!
//! Parses arguments, builds the hosted engine, and runs the pipeline over
//! the real console handles.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use briefly_rs::cli::{Cli, REPORT_FILENAME, run};
use briefly_rs::engine::create_engine;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let engine = match create_engine(&cli.model, cli.engine_config()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match run(
        &cli,
        engine.as_ref(),
        &mut input,
        &mut out,
        Path::new(REPORT_FILENAME),
    ) {
        Ok(_) => {
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Err(e) = out.flush()
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing to stdout: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
