//! Font statistics and font-name classification.
//!
//! Sizes are compared after rounding to one decimal so that `11.98` and
//! `12.0` count as the same size. Ties between equally weighted candidates
//! resolve to the candidate seen first in reading order.

use super::types::{Fragment, Line};

/// Round a font size to one decimal place.
pub fn round_size(size: f64) -> f64 {
    (size * 10.0).round() / 10.0
}

/// Character-weighted tally that keeps first-seen order for tie-breaks.
struct Tally<K> {
    entries: Vec<(K, usize)>,
}

impl<K: PartialEq> Tally<K> {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn add(&mut self, key: K, weight: usize) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += weight,
            None => self.entries.push((key, weight)),
        }
    }

    /// Heaviest key; the earliest one wins a tie.
    fn into_mode(self) -> Option<K> {
        let mut best: Option<(K, usize)> = None;
        for (key, weight) in self.entries {
            if best.as_ref().map_or(true, |(_, w)| weight > *w) {
                best = Some((key, weight));
            }
        }
        best.map(|(key, _)| key)
    }
}

/// The `(size, name)` pair covering the most characters of a line.
///
/// Weights count every character, whitespace included. Returns `(0.0, "")`
/// for an empty slice.
pub fn dominant_font(fragments: &[Fragment]) -> (f64, String) {
    let mut tally = Tally::new();
    for fragment in fragments {
        tally.add(
            (round_size(fragment.font_size), fragment.font_name.as_str()),
            fragment.text.chars().count(),
        );
    }
    tally
        .into_mode()
        .map_or((0.0, String::new()), |(size, name)| (size, name.to_string()))
}

/// The page's body font size: the character-weighted modal size over all
/// fragments of all lines, counting only trimmed text.
///
/// Returns `0.0` when the page has no fragments, which disables heading
/// classification.
pub fn body_font_size(lines: &[Line]) -> f64 {
    let mut tally = Tally::new();
    for fragment in lines.iter().flat_map(|line| &line.fragments) {
        tally.add(
            round_size(fragment.font_size),
            fragment.text.trim().chars().count(),
        );
    }
    tally.into_mode().unwrap_or(0.0)
}

/// Font name suggests a bold weight (`Helvetica-Bold`, `NimbusRomNo9L-Medi`, `ArialBd`).
pub fn is_bold(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    lower.contains("bold") || lower.contains("medi") || lower.ends_with("bd")
}

/// Font name suggests an italic or oblique style.
pub fn is_italic(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    lower.contains("ital") || lower.contains("obli") || lower.ends_with("-it")
}

/// Font name suggests a monospace face.
pub fn is_mono(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    lower.contains("mono")
        || lower.contains("courier")
        || lower.contains("consola")
        || lower.contains("typewriter")
        // Computer Modern Typewriter
        || lower.starts_with("cmtt")
}

/// Every non-blank fragment uses a bold font.
pub fn all_bold(fragments: &[Fragment]) -> bool {
    fragments
        .iter()
        .filter(|f| !f.is_blank())
        .all(|f| is_bold(&f.font_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, size: f64, name: &str) -> Fragment {
        Fragment::new(text, (0.0, 10.0, 10.0, 0.0), size, name)
    }

    fn line_of(fragments: Vec<Fragment>) -> Line {
        Line {
            fragments,
            top: 10.0,
            bottom: 0.0,
            left: 0.0,
            font_size: 0.0,
            font_name: String::new(),
        }
    }

    #[test]
    fn round_size_one_decimal() {
        assert!((round_size(11.96) - 12.0).abs() < 1e-4);
        assert!((round_size(10.44) - 10.4).abs() < 1e-4);
    }

    #[test]
    fn dominant_font_weights_by_characters() {
        let fragments = vec![
            frag("Short", 18.0, "Serif-Bold"),
            frag(" a much longer body run", 10.0, "Serif"),
        ];
        assert_eq!(dominant_font(&fragments), (10.0, "Serif".to_string()));
    }

    #[test]
    fn dominant_font_counts_whitespace() {
        let fragments = vec![frag("abc", 12.0, "A"), frag("ab  ", 10.0, "B")];
        assert_eq!(dominant_font(&fragments), (10.0, "B".to_string()));
    }

    #[test]
    fn dominant_font_tie_keeps_first_seen() {
        let fragments = vec![frag("abcd", 12.0, "First"), frag("wxyz", 10.0, "Second")];
        assert_eq!(dominant_font(&fragments), (12.0, "First".to_string()));
    }

    #[test]
    fn dominant_font_merges_rounded_sizes() {
        let fragments = vec![
            frag("aa", 9.96, "Serif"),
            frag("bb", 10.04, "Serif"),
            frag("ccc", 14.0, "Serif"),
        ];
        assert_eq!(dominant_font(&fragments), (10.0, "Serif".to_string()));
    }

    #[test]
    fn dominant_font_empty() {
        assert_eq!(dominant_font(&[]), (0.0, String::new()));
    }

    #[test]
    fn body_size_is_weighted_mode_across_lines() {
        let lines = vec![
            line_of(vec![frag("Title", 24.0, "Serif")]),
            line_of(vec![frag("Body text on one line", 10.0, "Serif")]),
            line_of(vec![frag("More body text", 10.0, "Serif-Bold")]),
        ];
        assert!((body_font_size(&lines) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn body_size_ignores_surrounding_whitespace() {
        let lines = vec![line_of(vec![
            frag("ab          ", 14.0, "Serif"),
            frag("abc", 10.0, "Serif"),
        ])];
        assert!((body_font_size(&lines) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn body_size_zero_without_font_metadata() {
        let lines = vec![line_of(vec![frag("no metadata", 0.0, "")])];
        assert!(body_font_size(&lines).abs() < f64::EPSILON);
        assert!(body_font_size(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn bold_detection() {
        assert!(is_bold("Helvetica-Bold"));
        assert!(is_bold("NimbusRomNo9L-Medi"));
        assert!(is_bold("Arial-BD"));
        assert!(is_bold("ArialBd"));
        assert!(!is_bold("Helvetica"));
        assert!(!is_bold("Times-Roman"));
    }

    #[test]
    fn italic_detection() {
        assert!(is_italic("Times-Italic"));
        assert!(is_italic("Helvetica-Oblique"));
        assert!(is_italic("Garamond-It"));
        assert!(!is_italic("Times-Roman"));
    }

    #[test]
    fn mono_detection() {
        assert!(is_mono("DejaVuSansMono"));
        assert!(is_mono("Courier-Bold"));
        assert!(is_mono("Consolas"));
        assert!(is_mono("CMTT10"));
        assert!(is_mono("LMTypewriter10-Regular"));
        assert!(!is_mono("Helvetica"));
    }

    #[test]
    fn all_bold_skips_blank_fragments() {
        let fragments = vec![frag("Bold", 10.0, "X-Bold"), frag(" ", 10.0, "X-Regular")];
        assert!(all_bold(&fragments));
        let mixed = vec![frag("Bold", 10.0, "X-Bold"), frag("plain", 10.0, "X")];
        assert!(!all_bold(&mixed));
    }
}
