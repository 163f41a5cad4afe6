//! Output formatting for the summarization pipeline.
//!
//! Pure string builders: the banner, titled sections with wrapped bodies,
//! and the flat report file body. Nothing here touches stdout directly.

use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;

/// Column width the banner is centered in.
pub const BANNER_WIDTH: usize = 70;

/// Default column width for wrapped section bodies.
pub const DEFAULT_WRAP_WIDTH: usize = 90;

/// Application title shown in the banner.
const BANNER_TITLE: &str = "TEXT SUMMARIZATION TOOL USING NLP";

/// Formats the startup banner.
#[must_use]
pub fn format_banner() -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{BANNER_TITLE:^BANNER_WIDTH$}\n{rule}\n")
}

/// Formats a titled section: title, a dash underline matching the title
/// length, then the content wrapped to `width` columns.
#[must_use]
pub fn format_section(title: &str, content: &str, width: usize) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "\n{title}");
    let _ = writeln!(output, "{}", "-".repeat(title.graphemes(true).count()));
    let _ = writeln!(output, "{}", fill(content, width));
    output
}

/// Formats the flat report body written by the persister.
///
/// Layout is fixed: a labeled original-text section, a blank line, then a
/// labeled summary section with no trailing newline.
#[must_use]
pub fn format_report(original: &str, summary: &str) -> String {
    format!("ORIGINAL TEXT:\n{original}\n\nSUMMARY:\n{summary}")
}

/// Wraps text to the given column width.
///
/// Greedy word wrap over whitespace-separated tokens; width is measured in
/// grapheme clusters so multi-byte text wraps where a reader would expect.
/// Words longer than the width are broken rather than overflowing.
#[must_use]
pub fn fill(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in break_word(word, width) {
            let piece_width = piece.graphemes(true).count();

            if current.is_empty() {
                current.push_str(&piece);
                current_width = piece_width;
            } else if current_width + 1 + piece_width <= width {
                current.push(' ');
                current.push_str(&piece);
                current_width += 1 + piece_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(&piece);
                current_width = piece_width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Splits a single word into pieces no wider than `width` graphemes.
fn break_word(word: &str, width: usize) -> Vec<String> {
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    if graphemes.len() <= width {
        return vec![word.to_string()];
    }
    graphemes.chunks(width).map(|c| c.concat()).collect()
}
