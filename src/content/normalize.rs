//! Post-conversion output normalization.
//!
//! Applied by [`super::ContentRouter`] to every handler's output:
//!
//! - CRLF and lone CR become LF
//! - control characters other than `\n` and `\t` are removed
//! - trailing spaces and tabs are stripped from each line
//! - runs of three or more newlines collapse to one blank line
//! - leading and trailing whitespace is trimmed

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_ENDINGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").expect("valid regex"));
static TRAILING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+\n").expect("valid regex"));
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Normalize converted markdown.
pub fn normalize_output(text: &str) -> String {
    let text = LINE_ENDINGS.replace_all(text, "\n");

    let mut text: String = text
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect();

    // Terminate the last line so its trailing whitespace matches too.
    if !text.ends_with('\n') {
        text.push('\n');
    }
    let text = TRAILING_WHITESPACE.replace_all(&text, "\n");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");

    text.trim().to_string()
}
