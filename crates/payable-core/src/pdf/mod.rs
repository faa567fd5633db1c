//! PDF processing module.

mod extractor;
pub mod layout;
pub mod tables;

pub use extractor::PdfExtractor;
pub use layout::{find_tables, split_line, word_lines, word_tables, PlacedWord};
pub use tables::{detect_tables, split_cells};

use crate::error::PdfError;
use crate::models::document::Page;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for document parsers that turn raw bytes into pages.
pub trait DocumentParser {
    /// Parse a document into pages, in document order, numbered from 1.
    fn parse(&self, data: &[u8]) -> crate::Result<Vec<Page>>;
}
