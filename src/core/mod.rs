//! Core domain models for briefly-rs.
//!
//! This module contains the two data structures the pipeline passes around:
//! the input document and the generated summary. These are pure domain
//! models with no I/O dependencies.

pub mod document;

pub use document::{Document, Summary};
