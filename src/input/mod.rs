//! Input acquisition and validation.
//!
//! Documents arrive one of two ways: typed line by line (a blank line ends
//! entry, lines join with single spaces) or read whole from a UTF-8 text
//! file. Before summarization the document must clear a minimum length of
//! [`MIN_WORD_COUNT`] whitespace-separated tokens.

use crate::core::Document;
use crate::error::Result;
use std::io::BufRead;
use std::path::Path;

/// Minimum number of whitespace-separated tokens a document needs before
/// summarization is attempted.
pub const MIN_WORD_COUNT: usize = 40;

/// Reads multiline input until a blank line (or EOF).
///
/// Lines are joined with single spaces and the result is trimmed, so the
/// document carries no entry-mode line structure.
///
/// # Errors
///
/// Returns an error if reading from the input handle fails.
pub fn read_interactive<R: BufRead>(input: &mut R) -> Result<Document> {
    let mut lines = Vec::new();

    loop {
        let mut line = String::new();
        let bytes = input.read_line(&mut line)?;
        if bytes == 0 || line.trim().is_empty() {
            break;
        }
        lines.push(line.trim_end_matches(['\r', '\n']).to_string());
    }

    Ok(Document::from_content(lines.join(" ").trim().to_string()))
}

/// Reads a document from a UTF-8 text file.
///
/// # Errors
///
/// Returns [`crate::error::IoError::FileNotFound`] if the path does not
/// point at a file, or a read error if the content cannot be loaded.
pub fn read_document_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let content = crate::io::read_file(&path)?;
    Ok(Document::from_file(path.as_ref().to_path_buf(), content))
}

/// Returns whether the document is long enough to summarize.
#[must_use]
pub fn meets_minimum_length(document: &Document) -> bool {
    document.word_count() >= MIN_WORD_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_case::test_case;

    #[test]
    fn test_read_interactive_until_blank_line() {
        let mut input = Cursor::new("first line\nsecond line\n\nignored\n");
        let doc = read_interactive(&mut input).unwrap();
        assert_eq!(doc.content(), "first line second line");
        assert!(doc.source.is_none());
    }

    #[test]
    fn test_read_interactive_eof_terminates() {
        let mut input = Cursor::new("only line");
        let doc = read_interactive(&mut input).unwrap();
        assert_eq!(doc.content(), "only line");
    }

    #[test]
    fn test_read_interactive_empty() {
        let mut input = Cursor::new("");
        let doc = read_interactive(&mut input).unwrap();
        assert_eq!(doc.content(), "");
        assert_eq!(doc.word_count(), 0);
    }

    #[test]
    fn test_read_interactive_whitespace_line_terminates() {
        let mut input = Cursor::new("text\n   \nmore\n");
        let doc = read_interactive(&mut input).unwrap();
        assert_eq!(doc.content(), "text");
    }

    #[test]
    fn test_read_interactive_crlf() {
        let mut input = Cursor::new("one\r\ntwo\r\n\r\n");
        let doc = read_interactive(&mut input).unwrap();
        assert_eq!(doc.content(), "one two");
    }

    #[test]
    fn test_read_document_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("article.txt");
        std::fs::write(&path, "File body text").unwrap();

        let doc = read_document_file(&path).unwrap();
        assert_eq!(doc.content(), "File body text");
        assert_eq!(doc.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_read_document_file_missing() {
        let result = read_document_file("/nonexistent/article.txt");
        assert!(result.is_err());
    }

    #[test_case(39, false; "one below threshold")]
    #[test_case(40, true; "exactly at threshold")]
    #[test_case(41, true; "above threshold")]
    #[test_case(0, false; "empty")]
    fn test_meets_minimum_length(words: usize, expected: bool) {
        let content = vec!["w"; words].join(" ");
        let doc = Document::from_content(content);
        assert_eq!(meets_minimum_length(&doc), expected);
    }
}
