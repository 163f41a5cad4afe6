//! Summarization engine abstraction.
//!
//! The summarization itself is delegated to an external pretrained model.
//! This module defines the capability interface ([`SummaryEngine`]) and the
//! length/decoding options the pipeline passes to it; the concrete hosted
//! inference client lives in [`hf`].

pub mod hf;

pub use hf::{EngineConfig, HostedEngine};

use crate::error::Result;

/// Default pretrained model identifier.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Default maximum summary length in model tokens.
pub const DEFAULT_MAX_LENGTH: usize = 130;

/// Default minimum summary length in model tokens.
pub const DEFAULT_MIN_LENGTH: usize = 30;

/// Length bounds and decoding options for a summarization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Maximum summary length in model tokens.
    pub max_length: usize,
    /// Minimum summary length in model tokens.
    pub min_length: usize,
    /// Whether to sample during decoding. `false` gives deterministic output.
    pub do_sample: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            do_sample: false,
        }
    }
}

impl SummaryOptions {
    /// Creates options with explicit length bounds and deterministic decoding.
    #[must_use]
    pub const fn with_bounds(max_length: usize, min_length: usize) -> Self {
        Self {
            max_length,
            min_length,
            do_sample: false,
        }
    }
}

/// Capability interface for an external summarization engine.
///
/// Maps (text, length bounds) to a shortened text. Implementations own all
/// model concerns: weights, tokenization, decoding. The pipeline makes
/// exactly one call per run and treats any failure as fatal.
///
/// # Examples
///
/// ```
/// use briefly_rs::engine::{SummaryEngine, SummaryOptions};
/// use briefly_rs::error::Result;
///
/// struct Echo;
///
/// impl SummaryEngine for Echo {
///     fn summarize(&self, text: &str, _options: &SummaryOptions) -> Result<String> {
///         Ok(text.to_string())
///     }
///     fn model(&self) -> &str {
///         "echo"
///     }
/// }
///
/// let engine = Echo;
/// let out = engine.summarize("hello", &SummaryOptions::default()).unwrap();
/// assert_eq!(out, "hello");
/// ```
pub trait SummaryEngine {
    /// Summarizes the given text within the given length bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be reached, rejects the input
    /// (e.g., it exceeds the model's internal token limit), or returns an
    /// undecodable response.
    fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String>;

    /// Returns the model identifier this engine is bound to.
    fn model(&self) -> &str;
}

/// Creates the default engine bound to the named pretrained model.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::ClientInit`] if the HTTP client
/// cannot be constructed.
pub fn create_engine(model: &str, config: EngineConfig) -> Result<Box<dyn SummaryEngine>> {
    Ok(Box::new(HostedEngine::new(model, config)?))
}
