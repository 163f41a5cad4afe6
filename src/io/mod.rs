//! File reading and writing utilities.
//!
//! Thin wrappers over `std::fs` that surface typed errors: a missing file
//! becomes [`IoError::FileNotFound`], non-UTF-8 content a read failure, and
//! so on. Documents here are small (articles, not corpora), so everything
//! reads in full.

use crate::error::{IoError, Result};
use std::path::Path;

/// Reads a file to a UTF-8 string.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the path does not point at a file,
/// or [`IoError::ReadFailed`] if reading fails or the content is not valid
/// UTF-8.
///
/// # Examples
///
/// ```no_run
/// use briefly_rs::io::read_file;
///
/// let content = read_file("article.txt").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.is_file() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let bytes = std::fs::read(path_ref).map_err(|e| IoError::ReadFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| {
        IoError::ReadFailed {
            path: path_str,
            reason: format!("invalid UTF-8: {e}"),
        }
        .into()
    })
}

/// Writes content to a file, creating parent directories if needed.
///
/// Overwrites any existing file at the path.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}
