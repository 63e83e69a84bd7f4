//! Shared types for the layout engine.
//!
//! Contains the fragment, line and run records passed between the grouping,
//! font statistics, classification and rendering stages. Kept as plain data
//! so every stage is a free function over these records.

/// A positioned run of text as returned by the page extractor.
///
/// Coordinates are in PDF points with `top` increasing upward, so a higher
/// `top` is closer to the visual top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    /// Font size in points, `0.0` when the extractor has no font metadata.
    pub font_size: f64,
    /// Font name, empty when unknown.
    pub font_name: String,
}

impl Fragment {
    /// Build a fragment with a bounding box and font metadata.
    pub fn new(
        text: impl Into<String>,
        (left, top, right, bottom): (f64, f64, f64, f64),
        font_size: f64,
        font_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            left,
            top,
            right,
            bottom,
            font_size,
            font_name: font_name.into(),
        }
    }

    /// Returns `true` if the fragment carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A text line built from fragments that share a vertical position.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Fragments ordered left-to-right.
    pub fragments: Vec<Fragment>,
    /// Top of the first fragment inserted into the line.
    pub top: f64,
    /// Bottom of the first fragment inserted into the line.
    pub bottom: f64,
    /// Leftmost fragment edge.
    pub left: f64,
    /// Font size covering the most characters, rounded to one decimal.
    pub font_size: f64,
    /// Font name paired with [`Line::font_size`].
    pub font_name: String,
}

impl Line {
    /// Concatenated fragment text with no separator.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// A maximal sequence of same-formatting fragments within a line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattingRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub mono: bool,
}
