//! Error types for the page extraction boundary.

use thiserror::Error;

/// Failure of a page-text extraction primitive.
///
/// Never surfaced to callers of the layout engine: a failed structured
/// extraction falls back to plain text, and a failed plain extraction
/// leaves the page empty.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("extraction backend error: {0}")]
    Backend(String),

    #[error("page {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
