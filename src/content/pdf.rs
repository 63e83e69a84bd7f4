//! PDF to Markdown conversion handler.
//!
//! Uses `pdfium-render` (Chromium's PDF library) to extract positioned text
//! segments with font metadata, then hands them to the layout engine.
//!
//! # Pipeline
//!
//! ```text
//! PDF bytes → pdfium text segments → layout reconstruction → markdown
//!                  └─ (no segments) → pdfium plain page text
//! ```

use anyhow::{Context, Result};
use pdfium_render::prelude::*;
use tracing::debug;

use super::{ContentHandler, ConversionResult};
use crate::config::LayoutConfig;
use crate::error::{self, ExtractError};
use crate::layout::{render_document, Fragment, PageSource};

/// Converts PDF documents to markdown with layout reconstruction.
pub struct PdfHandler {
    layout: LayoutConfig,
}

impl PdfHandler {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }
}

impl Default for PdfHandler {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// An open pdfium document viewed as a [`PageSource`].
struct PdfiumPages<'a, 'b> {
    document: &'a PdfDocument<'b>,
}

fn backend(e: &PdfiumError) -> ExtractError {
    ExtractError::Backend(format!("{e:?}"))
}

/// Build a fragment from a segment's bounds and first-character font,
/// widening pdfium's `f32` values. A missing font yields size `0.0` and an
/// empty name.
fn segment_fragment(
    text: String,
    (left, top, right, bottom): (f32, f32, f32, f32),
    font: Option<(f32, String)>,
) -> Fragment {
    let (font_size, font_name) = font.unwrap_or((0.0, String::new()));
    Fragment::new(
        text,
        (
            f64::from(left),
            f64::from(top),
            f64::from(right),
            f64::from(bottom),
        ),
        f64::from(font_size),
        font_name,
    )
}

impl<'b> PdfiumPages<'_, 'b> {
    fn page(&self, index: usize) -> error::Result<PdfPage<'b>> {
        let count = self.page_count();
        let idx = u16::try_from(index)
            .ok()
            .filter(|_| index < count)
            .ok_or(ExtractError::PageOutOfRange { index, count })?;
        self.document.pages().get(idx).map_err(|e| backend(&e))
    }
}

impl PageSource for PdfiumPages<'_, '_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    /// One fragment per pdfium text segment; font size and name come from
    /// the segment's first character.
    #[allow(deprecated)] // PdfRect field access deprecated in 0.8.28, removed in 0.9.0
    fn extract_structured(&self, index: usize) -> error::Result<Vec<Fragment>> {
        let page = self.page(index)?;
        let text = page.text().map_err(|e| backend(&e))?;

        let mut fragments = Vec::new();
        for segment in text.segments().iter() {
            let rect = segment.bounds();
            let font = match segment.chars() {
                Ok(chars) => chars
                    .iter()
                    .next()
                    .map(|ch| (ch.scaled_font_size().value, ch.font_name())),
                Err(_) => None,
            };

            fragments.push(segment_fragment(
                segment.text(),
                (rect.left.value, rect.top.value, rect.right.value, rect.bottom.value),
                font,
            ));
        }

        Ok(fragments)
    }

    fn extract_plain_text(&self, index: usize) -> error::Result<String> {
        let page = self.page(index)?;
        let text = page.text().map_err(|e| backend(&e))?;
        Ok(text.all())
    }
}

impl ContentHandler for PdfHandler {
    fn supported_types(&self) -> &[&str] {
        &["application/pdf", "application/x-pdf"]
    }

    fn to_markdown(&self, bytes: &[u8], content_type: &str) -> Result<ConversionResult> {
        let start = std::time::Instant::now();

        let pdfium = Pdfium::default();
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .context("Failed to parse PDF")?;

        let source = PdfiumPages {
            document: &document,
        };
        let page_count = source.page_count();
        let markdown = render_document(&source, &self.layout);

        debug!(page_count, "PDF converted");

        Ok(ConversionResult {
            markdown,
            page_count: Some(page_count),
            content_type: content_type.to_string(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_types_is_pdf() {
        let handler = PdfHandler::default();
        assert!(handler.supported_types().contains(&"application/pdf"));
    }

    #[test]
    fn segment_maps_bounds_and_font() {
        let fragment = segment_fragment(
            "Results".to_string(),
            (72.0, 700.5, 130.25, 688.0),
            Some((11.5, "Helvetica-Bold".to_string())),
        );
        assert_eq!(fragment.text, "Results");
        assert!((fragment.left - 72.0).abs() < f64::EPSILON);
        assert!((fragment.top - 700.5).abs() < f64::EPSILON);
        assert!((fragment.right - 130.25).abs() < f64::EPSILON);
        assert!((fragment.bottom - 688.0).abs() < f64::EPSILON);
        assert!((fragment.font_size - 11.5).abs() < f64::EPSILON);
        assert_eq!(fragment.font_name, "Helvetica-Bold");
    }

    #[test]
    fn segment_without_font_is_unknown_size() {
        let fragment = segment_fragment("x".to_string(), (0.0, 10.0, 5.0, 0.0), None);
        assert!(fragment.font_size.abs() < f64::EPSILON);
        assert!(fragment.font_name.is_empty());
    }

    #[test]
    #[ignore] // Needs the pdfium library; run with --ignored
    fn garbage_bytes_fail_to_parse() {
        let err = PdfHandler::default()
            .to_markdown(b"definitely not a pdf", "application/pdf")
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse PDF"), "{err:#}");
    }
}
