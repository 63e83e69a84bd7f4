//! Page orchestration: extraction, fallback, rendering and joining.
//!
//! Extraction runs sequentially because extraction backends (pdfium in
//! particular) are not thread-safe. Rendering is pure, so extracted pages
//! may be rendered on the rayon pool; the indexed collect keeps page order.

use rayon::prelude::*;
use tracing::debug;

use super::assemble::render_lines;
use super::fonts::body_font_size;
use super::lines::group_lines;
use super::types::Fragment;
use crate::config::LayoutConfig;
use crate::error::Result;

/// Output for a document with no extractable text on any page.
pub const NO_TEXT_SENTINEL: &str = "[No readable text content found in PDF]";

/// Page-text extraction capability supplied by the caller.
///
/// Blocking, timeouts and retries are the implementor's concern; an error
/// here is treated as "no text from this primitive" for that page.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Positioned fragments with font metadata.
    fn extract_structured(&self, index: usize) -> Result<Vec<Fragment>>;

    /// Best-effort page text without layout metadata.
    fn extract_plain_text(&self, index: usize) -> Result<String>;
}

/// What extraction produced for one page.
#[derive(Debug, Clone, PartialEq)]
enum PageContent {
    Structured(Vec<Fragment>),
    /// Trimmed plain text, used verbatim.
    Plain(String),
    Empty,
}

impl PageContent {
    fn render(self) -> String {
        match self {
            Self::Structured(fragments) => render_page(fragments),
            Self::Plain(text) => text,
            Self::Empty => String::new(),
        }
    }
}

fn extract_page<S: PageSource + ?Sized>(source: &S, index: usize) -> PageContent {
    match source.extract_structured(index) {
        Ok(fragments) if fragments.iter().any(|f| !f.is_blank()) => {
            return PageContent::Structured(fragments);
        }
        Ok(_) => debug!(page = index, "no structured text, using plain text"),
        Err(e) => debug!(page = index, error = %e, "structured extraction failed, using plain text"),
    }

    match source.extract_plain_text(index) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                PageContent::Empty
            } else {
                PageContent::Plain(trimmed.to_string())
            }
        }
        Err(e) => {
            debug!(page = index, error = %e, "plain text extraction failed, skipping page");
            PageContent::Empty
        }
    }
}

/// Reconstruct one page's Markdown from its fragments.
pub fn render_page(fragments: Vec<Fragment>) -> String {
    let lines = group_lines(fragments);
    let body_size = body_font_size(&lines);
    render_lines(&lines, body_size)
}

/// Convert every page of `source` and join the non-empty results with a
/// blank line, in page order.
///
/// Returns [`NO_TEXT_SENTINEL`] when no page yields text.
pub fn render_document<S: PageSource + ?Sized>(source: &S, config: &LayoutConfig) -> String {
    let page_count = source.page_count();
    let pages: Vec<PageContent> = (0..page_count).map(|i| extract_page(source, i)).collect();

    let rendered: Vec<String> = if config.parallel {
        pages.into_par_iter().map(PageContent::render).collect()
    } else {
        pages.into_iter().map(PageContent::render).collect()
    };

    let non_empty: Vec<&str> = rendered
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect();

    debug!(page_count, text_pages = non_empty.len(), "document rendered");

    if non_empty.is_empty() {
        return NO_TEXT_SENTINEL.to_string();
    }
    non_empty.join("\n\n")
}
