//! Paragraph assembly: turns classified lines into a page's Markdown.
//!
//! Headings get a blank line before them (unless they open the page) and a
//! blank line after. Body lines are emitted one per output line, with a
//! blank line inserted when the vertical gap to the previous line exceeds
//! [`PARAGRAPH_GAP_RATIO`] line heights.

use super::heading::{classify_line, strip_emphasis};
use super::runs::{render_line, SUPERSCRIPT_MAX_CHARS, SUPERSCRIPT_RATIO};
use super::types::Line;

/// Lines whose dominant size is below this fraction of body size are annotation-sized.
pub const ANNOTATION_RATIO: f64 = 0.75;

/// Gap, in line heights, above which two body lines belong to different paragraphs.
pub const PARAGRAPH_GAP_RATIO: f64 = 1.5;

/// A whole line that is nothing but a footnote marker.
fn is_footnote_marker_line(line: &Line, body_size: f64) -> bool {
    if line.font_size <= 0.0 || body_size <= 0.0 || line.font_size >= body_size * ANNOTATION_RATIO {
        return false;
    }
    line.font_size < body_size * SUPERSCRIPT_RATIO
        && line.text().trim().chars().count() <= SUPERSCRIPT_MAX_CHARS
}

/// Render ordered, font-annotated lines into Markdown.
pub fn render_lines(lines: &[Line], body_size: f64) -> String {
    let mut md = String::new();
    let mut prev_was_heading = false;

    for (i, line) in lines.iter().enumerate() {
        if line.text().trim().is_empty() || is_footnote_marker_line(line, body_size) {
            continue;
        }

        let level = classify_line(line, body_size);

        let rendered = render_line(&line.fragments, body_size);
        let rendered = rendered.trim();
        if rendered.is_empty() {
            continue;
        }

        if level > 0 {
            if !md.is_empty() {
                md.push('\n');
            }
            for _ in 0..level {
                md.push('#');
            }
            md.push(' ');
            md.push_str(&strip_emphasis(rendered));
            md.push_str("\n\n");
            prev_was_heading = true;
            continue;
        }

        // Gap is measured against the line directly above, emitted or not.
        if i > 0 && !prev_was_heading {
            let prev = &lines[i - 1];
            let gap = prev.bottom - line.top;
            let mut line_height = line.top - line.bottom;
            if line_height <= 0.0 {
                line_height = body_size;
            }
            if gap > line_height * PARAGRAPH_GAP_RATIO {
                md.push('\n');
            }
        }

        md.push_str(rendered);
        md.push('\n');
        prev_was_heading = false;
    }

    md
}
