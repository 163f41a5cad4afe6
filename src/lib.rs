//! # briefly-rs
//!
//! Text summarization CLI.
//!
//! briefly-rs obtains a block of text (typed in or loaded from a file),
//! validates that it is long enough to be worth summarizing, sends it to a
//! named pretrained summarization model, prints the wrapped original and
//! summary, and optionally persists both to a flat report file.
//!
//! ## Features
//!
//! - **Pluggable engine**: summarization behind the [`engine::SummaryEngine`]
//!   capability trait, with a hosted inference API client built in
//! - **Two input modes**: interactive multiline entry or whole-file reads
//! - **Deterministic output**: fixed length bounds, sampling disabled

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod input;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Document, Summary};

// Re-export engine types
pub use engine::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_MODEL, EngineConfig, HostedEngine,
    SummaryEngine, SummaryOptions, create_engine,
};

// Re-export CLI types
pub use cli::{Cli, REPORT_FILENAME, RunOutcome, run};

// Re-export input validation
pub use input::MIN_WORD_COUNT;
