//! Heading classification from font size ratio and weight.
//!
//! | ratio to body size | level |
//! |--------------------|-------|
//! | `>= 2.0`           | 1     |
//! | `>= 1.5`           | 2     |
//! | `>= 1.1`, bold     | 3     |
//! | `>= 1.1`           | 4     |
//! | otherwise          | 0     |
//!
//! Short all-bold lines at or above body size are promoted to level 4
//! (section labels like "References").

use super::fonts::all_bold;
use super::types::Line;

/// Maximum length (in characters) of a bold body-size line promoted to a heading.
pub const MAX_BOLD_HEADING_CHARS: usize = 80;

/// Heading level for a font size relative to the body size. `0` is body text.
pub fn heading_level(font_size: f64, body_size: f64, bold: bool) -> u8 {
    if body_size <= 0.0 {
        return 0;
    }
    let ratio = font_size / body_size;
    if ratio >= 2.0 {
        1
    } else if ratio >= 1.5 {
        2
    } else if ratio >= 1.1 {
        if bold {
            3
        } else {
            4
        }
    } else {
        0
    }
}

/// Classify a line, including the short-bold-label promotion.
pub fn classify_line(line: &Line, body_size: f64) -> u8 {
    if body_size <= 0.0 {
        return 0;
    }

    let bold = all_bold(&line.fragments);
    let level = heading_level(line.font_size, body_size, bold);

    if level == 0
        && bold
        && line.font_size >= body_size
        && line.text().trim().chars().count() < MAX_BOLD_HEADING_CHARS
    {
        return 4;
    }

    level
}

/// Remove inline emphasis markers from heading text.
///
/// Triple markers go first so `***x***` never leaves a stray `*`.
pub fn strip_emphasis(text: &str) -> String {
    text.replace("***", "")
        .replace("**", "")
        .replace('*', "")
        .replace('`', "")
}
