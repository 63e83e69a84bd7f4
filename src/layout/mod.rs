//! Layout-to-Markdown reconstruction for fixed-layout documents.
//!
//! Receives flat, positioned text fragments per page (no structural markup)
//! and infers headings, paragraphs and inline emphasis from geometry and
//! typography alone.
//!
//! # Pipeline
//!
//! ```text
//! fragments → line grouping → font statistics → heading classification
//!           → formatting runs → paragraph assembly → page join
//! ```
//!
//! # Example
//!
//! ```rust
//! use pagemark::layout::{render_page, Fragment};
//!
//! let fragments = vec![
//!     Fragment::new("Introduction", (72.0, 760.0, 250.0, 738.0), 22.0, "Times-Roman"),
//!     Fragment::new("Body text sets the baseline.", (72.0, 720.0, 300.0, 710.0), 10.0, "Times-Roman"),
//! ];
//! let md = render_page(fragments);
//! assert!(md.starts_with("# Introduction\n\n"));
//! ```

pub mod assemble;
pub mod document;
pub mod fonts;
pub mod heading;
pub mod lines;
pub mod runs;
pub mod types;

pub use document::{render_document, render_page, PageSource, NO_TEXT_SENTINEL};
pub use heading::{classify_line, heading_level, strip_emphasis};
pub use lines::group_lines;
pub use types::{FormattingRun, Fragment, Line};
