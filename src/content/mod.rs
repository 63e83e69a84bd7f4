//! Content-type-aware document conversion.
//!
//! Routes document bytes to the appropriate handler based on the MIME type.
//! Each handler implements [`ContentHandler`] to convert raw bytes into
//! markdown; the router normalizes every successful result.
//!
//! # Supported Content Types
//!
//! | Type | Handler | Feature Flag |
//! |------|---------|-------------|
//! | `application/pdf` | [`pdf::PdfHandler`] | `pdf` |
//! | `text/plain`, `text/markdown`, `application/json`, etc. | [`PlainHandler`] | always |
//!
//! # Example
//!
//! ```rust
//! use pagemark::content::ContentRouter;
//!
//! let router = ContentRouter::new();
//! let result = router.convert(b"Hello\r\n\r\n\r\n\r\nworld  ", "text/plain").unwrap();
//! assert_eq!(result.markdown, "Hello\n\nworld");
//! ```

pub mod normalize;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod plain;

use anyhow::{bail, Result};
use tracing::debug;

use crate::config::Config;
pub use normalize::normalize_output;
pub use plain::PlainHandler;

/// Metadata about a content conversion result.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// The converted markdown content.
    pub markdown: String,
    /// Number of pages (for paginated formats like PDF).
    pub page_count: Option<usize>,
    /// Original content type.
    pub content_type: String,
    /// Conversion time in milliseconds.
    pub elapsed_ms: f64,
}

/// Converts document bytes into markdown.
///
/// Implementations are stateless and synchronous.
pub trait ContentHandler: Send + Sync {
    /// MIME types this handler supports (e.g., `["application/pdf"]`).
    fn supported_types(&self) -> &[&str];

    /// Convert raw bytes to markdown.
    ///
    /// `content_type` is the full content type (may include parameters like
    /// `; charset=utf-8`).
    fn to_markdown(&self, bytes: &[u8], content_type: &str) -> Result<ConversionResult>;
}

/// Routes document bytes to the appropriate [`ContentHandler`] based on
/// the content type.
pub struct ContentRouter {
    handlers: Vec<Box<dyn ContentHandler>>,
    normalize: bool,
}

impl ContentRouter {
    /// Create a router with all available handlers and default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a router with all available handlers.
    ///
    /// PDF handler is included only when the `pdf` feature flag is enabled.
    pub fn with_config(config: &Config) -> Self {
        #[cfg(feature = "pdf")]
        let handlers: Vec<Box<dyn ContentHandler>> = vec![
            Box::new(pdf::PdfHandler::new(config.layout.clone())),
            Box::new(PlainHandler),
        ];

        #[cfg(not(feature = "pdf"))]
        let handlers: Vec<Box<dyn ContentHandler>> = vec![Box::new(PlainHandler)];

        Self {
            handlers,
            normalize: config.output.normalize,
        }
    }

    /// Find a handler for the given content type and convert the bytes.
    ///
    /// Unknown `text/*` types go to [`PlainHandler`]; anything else that no
    /// handler claims is an error.
    pub fn convert(&self, bytes: &[u8], content_type: &str) -> Result<ConversionResult> {
        let mime = mime_essence(content_type);

        let handler = self
            .handlers
            .iter()
            .find(|h| h.supported_types().iter().any(|t| *t == mime));

        let mut result = match handler {
            Some(handler) => handler.to_markdown(bytes, content_type)?,
            None if mime.starts_with("text/") => PlainHandler.to_markdown(bytes, content_type)?,
            None => bail!("unsupported content type: {mime}"),
        };

        debug!(
            content_type = %mime,
            elapsed_ms = result.elapsed_ms,
            "converted {} bytes",
            bytes.len()
        );

        if self.normalize {
            result.markdown = normalize_output(&result.markdown);
        }
        Ok(result)
    }
}

impl Default for ContentRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased MIME type without parameters.
fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_lowercase()
}

/// Map a file extension (with or without the leading dot) to a MIME type.
///
/// Returns `application/octet-stream` for unknown extensions.
pub fn mime_from_extension(ext: &str) -> &'static str {
    match ext.trim_start_matches('.').to_lowercase().as_str() {
        "pdf" => "application/pdf",
        "txt" | "text" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "jsonl" => "application/jsonl",
        "xml" => "text/xml",
        "html" | "htm" => "text/html",
        _ => "application/octet-stream",
    }
}
