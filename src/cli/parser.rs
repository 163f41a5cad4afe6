//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. The program runs one
//! linear pipeline per invocation, so there are no subcommands, only knobs
//! for the model, the summary bounds, and presentation.

use crate::engine::hf::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, EngineConfig};
use crate::engine::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_MODEL, SummaryOptions};
use crate::error::{CommandError, Result};
use clap::Parser;
use std::time::Duration;

/// briefly-rs: summarize a block of text with a pretrained model.
///
/// Prompts for text (typed or loaded from a file), sends it to a hosted
/// summarization model, prints the wrapped original and summary, and
/// optionally saves both to a report file.
#[derive(Parser, Debug)]
#[command(name = "briefly-rs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pretrained summarization model identifier.
    #[arg(short, long, env = "BRIEFLY_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum summary length in model tokens.
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Minimum summary length in model tokens.
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,

    /// Column width for wrapped output.
    #[arg(short, long, default_value_t = super::output::DEFAULT_WRAP_WIDTH)]
    pub width: usize,

    /// Base URL of the inference API.
    #[arg(long, env = "BRIEFLY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token for the inference API.
    #[arg(long, env = "HF_API_TOKEN")]
    pub api_token: Option<String>,

    /// Request timeout for the engine call, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Cli {
    /// Builds the validated summary options from the length bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] if `min_length` is not
    /// strictly below `max_length`, or a bound is zero.
    pub fn summary_options(&self) -> Result<SummaryOptions> {
        if self.min_length == 0 || self.max_length == 0 {
            return Err(CommandError::InvalidArgument(
                "length bounds must be positive".to_string(),
            )
            .into());
        }
        if self.min_length >= self.max_length {
            return Err(CommandError::InvalidArgument(format!(
                "--min-length {} must be below --max-length {}",
                self.min_length, self.max_length
            ))
            .into());
        }
        Ok(SummaryOptions::with_bounds(self.max_length, self.min_length))
    }

    /// Returns the validated wrap width.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] if the width is zero.
    pub fn wrap_width(&self) -> Result<usize> {
        if self.width == 0 {
            return Err(CommandError::InvalidArgument(
                "--width must be positive".to_string(),
            )
            .into());
        }
        Ok(self.width)
    }

    /// Builds the engine client configuration.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            api_url: self.api_url.clone(),
            api_token: self.api_token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
