//! `pagemark` - layout-aware document to Markdown conversion
//!
//! # Features
//!
//! - **Layout reconstruction**: headings, paragraphs and inline emphasis
//!   inferred from positioned text and font metadata ([`layout`])
//! - **Content routing**: MIME-based handler dispatch with output
//!   normalization ([`content`])
//! - **PDF**: pdfium-backed fragment extraction (`pdf` feature)
//!
//! # Example
//!
//! ```rust
//! use pagemark::config::LayoutConfig;
//! use pagemark::error::Result;
//! use pagemark::layout::{render_document, Fragment, PageSource};
//!
//! struct OnePage;
//!
//! impl PageSource for OnePage {
//!     fn page_count(&self) -> usize {
//!         1
//!     }
//!     fn extract_structured(&self, _index: usize) -> Result<Vec<Fragment>> {
//!         Ok(vec![Fragment::new("Hello", (72.0, 700.0, 110.0, 690.0), 10.0, "Helvetica")])
//!     }
//!     fn extract_plain_text(&self, _index: usize) -> Result<String> {
//!         Ok(String::new())
//!     }
//! }
//!
//! assert_eq!(render_document(&OnePage, &LayoutConfig::default()), "Hello");
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod layout;

pub use config::{Config, LayoutConfig};
pub use content::{ContentHandler, ContentRouter, ConversionResult};
pub use error::ExtractError;
pub use layout::{render_document, render_page, Fragment, PageSource, NO_TEXT_SENTINEL};

/// Version of pagemark
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
