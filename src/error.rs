//! Error types for briefly-rs operations.
//!
//! This module provides an error hierarchy using `thiserror` covering the
//! summarization engine, file I/O, and CLI argument handling.

use thiserror::Error;

/// Result type alias for briefly-rs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for briefly-rs operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Summarization engine errors (model loading, inference calls).
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI argument errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors from the external summarization engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to construct the engine client.
    #[error("failed to initialize engine client: {0}")]
    ClientInit(String),

    /// Transport-level failure (connection, timeout, TLS).
    #[error("request to summarization engine failed: {0}")]
    Http(String),

    /// The engine returned a non-success status.
    #[error("summarization engine returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The hosted model is still loading and cannot serve yet.
    #[error("model is still loading: {model}")]
    ModelLoading {
        /// Model identifier.
        model: String,
    },

    /// The engine response could not be decoded.
    #[error("malformed engine response: {0}")]
    MalformedResponse(String),

    /// The engine returned no summary candidates.
    #[error("engine returned no summary candidates")]
    EmptyResponse,
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI argument errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// Implement From traits for standard library and transport errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Engine(EngineError::Http(err.to_string()))
    }
}
