//! CLI layer for briefly-rs.
//!
//! Provides argument parsing with clap, the pipeline runner, and the
//! output formatters.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{REPORT_FILENAME, RunOutcome, run};
pub use parser::Cli;
