//! The summarization pipeline.
//!
//! Runs the six steps of a single invocation: announce the model, acquire
//! input, validate its length, call the engine, present both texts, and
//! optionally persist them. All console traffic goes through injected
//! reader/writer handles so the flow is testable end to end.

use crate::cli::output::{format_banner, format_report, format_section};
use crate::cli::parser::Cli;
use crate::core::{Document, Summary};
use crate::engine::SummaryEngine;
use crate::error::{Error, IoError, Result};
use crate::input::{MIN_WORD_COUNT, meets_minimum_length, read_document_file, read_interactive};
use std::io::{BufRead, Write};
use std::path::Path;

/// Fixed report filename the persister writes to.
pub const REPORT_FILENAME: &str = "summary_output.txt";

/// How a pipeline run ended.
///
/// The three early-exit variants are handled, user-facing conditions: a
/// message has been printed and the process still exits cleanly. Fatal
/// conditions (engine or filesystem failures) surface as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Summary produced and presented.
    Completed {
        /// Whether the report file was written.
        saved: bool,
    },
    /// Input had fewer than [`MIN_WORD_COUNT`] tokens.
    TooShort,
    /// File mode was chosen but the path did not exist.
    FileNotFound,
    /// Menu choice was neither "1" nor "2".
    InvalidChoice,
}

/// Runs the summarization pipeline once.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
/// * `engine` - The summarization capability.
/// * `input` - Console input handle.
/// * `out` - Console output handle.
/// * `report_path` - Where the persister writes on opt-in.
///
/// # Errors
///
/// Returns an error on invalid length bounds, engine failure, or a
/// filesystem error while writing the report. Handled user-facing
/// conditions return `Ok` with the matching [`RunOutcome`].
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    engine: &dyn SummaryEngine,
    input: &mut R,
    out: &mut W,
    report_path: &Path,
) -> Result<RunOutcome> {
    let options = cli.summary_options()?;
    let width = cli.wrap_width()?;

    out.write_all(format_banner().as_bytes())?;
    writeln!(out, "Loading summarizer model: {}", engine.model())?;

    // Input method selection
    writeln!(out, "\nChoose input method:")?;
    writeln!(out, "1. Paste text manually")?;
    writeln!(out, "2. Load from a .txt file")?;
    let choice = prompt_line(input, out, "Enter choice (1 or 2): ")?;

    let document = match choice.as_str() {
        "1" => {
            writeln!(out, "\nEnter your text (Press Enter twice to finish):\n")?;
            read_interactive(input)?
        }
        "2" => {
            let path = prompt_line(input, out, "Enter path to your .txt file: ")?;
            match read_document_file(&path) {
                Ok(document) => document,
                Err(Error::Io(IoError::FileNotFound { .. })) => {
                    writeln!(out, "Error: File not found!")?;
                    return Ok(RunOutcome::FileNotFound);
                }
                Err(e) => return Err(e),
            }
        }
        _ => {
            writeln!(out, "Error: Invalid choice.")?;
            return Ok(RunOutcome::InvalidChoice);
        }
    };

    if !meets_minimum_length(&document) {
        writeln!(
            out,
            "Warning: The text is too short. Please input at least {MIN_WORD_COUNT} words."
        )?;
        return Ok(RunOutcome::TooShort);
    }

    // Generate summary
    writeln!(out, "Summarizing your text. Please wait...\n")?;
    let summary = Summary::new(engine.summarize(document.content(), &options)?);

    // Display results
    out.write_all(format_section("ORIGINAL TEXT", document.content(), width).as_bytes())?;
    out.write_all(format_section("GENERATED SUMMARY", summary.content(), width).as_bytes())?;

    let saved = persist_on_opt_in(input, out, &document, &summary, report_path)?;

    writeln!(out, "\nDone! Thank you for using the summarization tool.")?;
    Ok(RunOutcome::Completed { saved })
}

/// Asks whether to save and writes the report on an explicit "y".
///
/// Any existing file at the report path is overwritten silently.
fn persist_on_opt_in<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    document: &Document,
    summary: &Summary,
    report_path: &Path,
) -> Result<bool> {
    let answer = prompt_line(
        input,
        out,
        "\nDo you want to save the summary to a file? (y/n): ",
    )?;

    if answer.to_lowercase() != "y" {
        return Ok(false);
    }

    let report = format_report(document.content(), summary.content());
    crate::io::write_file(report_path, &report)?;
    writeln!(out, "Summary saved to: {}", report_path.display())?;
    Ok(true)
}

/// Writes a prompt, flushes, and reads one trimmed line.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
