//! Text-like documents that are already Markdown or close to it.
//!
//! Bytes are decoded as UTF-8 with any byte-order mark removed; invalid
//! sequences become U+FFFD. No layout analysis runs, so the page count is
//! always unknown.

use anyhow::Result;

use super::{ContentHandler, ConversionResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode document text, dropping a leading UTF-8 byte-order mark.
fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Handler for Markdown, plain text and structured text formats.
///
/// Also the fallback for `text/*` types no other handler claims.
pub struct PlainHandler;

impl ContentHandler for PlainHandler {
    fn supported_types(&self) -> &[&str] {
        &[
            "text/plain",
            "text/markdown",
            "application/markdown",
            "application/json",
            "application/jsonl",
            "text/csv",
            "text/xml",
            "application/xml",
        ]
    }

    fn to_markdown(&self, bytes: &[u8], content_type: &str) -> Result<ConversionResult> {
        let start = std::time::Instant::now();

        Ok(ConversionResult {
            markdown: decode_text(bytes),
            page_count: None,
            content_type: content_type.to_string(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
