//! Core library for invoice total extraction.
//!
//! This crate provides:
//! - PDF page parsing (per-page text and tables)
//! - Total label matching and amount extraction from table rows
//! - Multilingual (Latin and Arabic script) currency detection
//! - Selection of the largest total across all pages

pub mod error;
pub mod models;
pub mod pdf;
pub mod invoice;

pub use error::{PayableError, PdfError, Result};
pub use models::config::PayableConfig;
pub use models::document::{Page, Row, Table};
pub use models::result::{AmountValue, Candidate, CurrencyCode, ExtractionResult};
pub use pdf::{DocumentParser, PdfExtractor};
pub use invoice::{InvoiceScanner, TotalExtractor};

/// Parse a PDF with default settings and extract its total and currency.
pub fn extract_invoice_data(data: &[u8]) -> Result<ExtractionResult> {
    InvoiceScanner::new().extract(&PdfExtractor::new(), data)
}
