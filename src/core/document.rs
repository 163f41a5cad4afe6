//! Document and summary types.
//!
//! A [`Document`] holds the text to summarize, captured either from
//! interactive entry or a file. A [`Summary`] holds the engine output.
//! Both are immutable once constructed.

use std::path::PathBuf;

/// A block of input text to be summarized.
///
/// # Examples
///
/// ```
/// use briefly_rs::core::Document;
///
/// let doc = Document::from_content("Hello, world!".to_string());
/// assert_eq!(doc.word_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source file path (if loaded from file).
    pub source: Option<PathBuf>,

    /// Document content.
    content: String,
}

impl Document {
    /// Creates a document from a content string.
    #[must_use]
    pub const fn from_content(content: String) -> Self {
        Self {
            source: None,
            content,
        }
    }

    /// Creates a document from a file path and the content read from it.
    #[must_use]
    pub const fn from_file(path: PathBuf, content: String) -> Self {
        Self {
            source: Some(path),
            content,
        }
    }

    /// Returns the document text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the number of whitespace-separated tokens.
    ///
    /// This is the measure used by the minimum-length guard, not the
    /// engine's internal tokenization.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Returns the content size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.content.len()
    }
}

/// A summary produced by the summarization engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Summary text.
    content: String,
}

impl Summary {
    /// Creates a summary from engine output.
    #[must_use]
    pub const fn new(content: String) -> Self {
        Self { content }
    }

    /// Returns the summary text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the number of whitespace-separated tokens.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
