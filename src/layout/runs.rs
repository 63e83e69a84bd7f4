//! Inline formatting runs and Markdown emphasis rendering.

use super::fonts::{is_bold, is_italic, is_mono};
use super::types::{Fragment, FormattingRun};

/// Fragments smaller than this fraction of the body size are superscript candidates.
pub const SUPERSCRIPT_RATIO: f64 = 0.6;

/// Superscript candidates with at most this many trimmed characters are dropped.
pub const SUPERSCRIPT_MAX_CHARS: usize = 3;

/// Tiny footnote marker (`¹`, `*`, `12`) that should not reach the output.
fn is_superscript_marker(fragment: &Fragment, body_size: f64) -> bool {
    fragment.font_size > 0.0
        && body_size > 0.0
        && fragment.font_size < body_size * SUPERSCRIPT_RATIO
        && fragment.text.trim().chars().count() <= SUPERSCRIPT_MAX_CHARS
}

/// Fold a line's fragments into maximal same-formatting runs.
///
/// Blank fragments and superscript markers are skipped before merging, so
/// a dropped marker never splits a run.
pub fn build_runs(fragments: &[Fragment], body_size: f64) -> Vec<FormattingRun> {
    let mut runs: Vec<FormattingRun> = Vec::new();

    for fragment in fragments {
        if fragment.is_blank() || is_superscript_marker(fragment, body_size) {
            continue;
        }

        let bold = is_bold(&fragment.font_name);
        let italic = is_italic(&fragment.font_name);
        let mono = is_mono(&fragment.font_name);

        if let Some(prev) = runs.last_mut() {
            if prev.bold == bold && prev.italic == italic && prev.mono == mono {
                prev.text.push_str(&fragment.text);
                continue;
            }
        }

        runs.push(FormattingRun {
            text: fragment.text.clone(),
            bold,
            italic,
            mono,
        });
    }

    runs
}

/// Render one run with Markdown emphasis.
///
/// Markers hug the text; trailing whitespace moves outside the closing
/// marker as a single space.
pub fn render_run(run: &FormattingRun, out: &mut String) {
    let text = run.text.as_str();

    if run.mono {
        out.push('`');
        out.push_str(text.trim());
        out.push('`');
        if text.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        return;
    }

    let marker = match (run.bold, run.italic) {
        (true, true) => "***",
        (true, false) => "**",
        (false, true) => "*",
        (false, false) => {
            out.push_str(text);
            return;
        }
    };

    let trimmed = text.trim_end_matches(' ');
    out.push_str(marker);
    out.push_str(trimmed);
    out.push_str(marker);
    if trimmed.len() < text.len() {
        out.push(' ');
    }
}

/// Render a line's fragments as inline Markdown.
pub fn render_line(fragments: &[Fragment], body_size: f64) -> String {
    let mut out = String::new();
    for run in build_runs(fragments, body_size) {
        render_run(&run, &mut out);
    }
    out
}
