//! Invoice total extraction module.

pub mod rules;
mod scanner;

pub use scanner::{amount_right_of, scan_row, select_total, InvoiceScanner};

use tracing::debug;

use crate::error::Result;
use crate::models::document::Page;
use crate::models::result::ExtractionResult;
use crate::pdf::DocumentParser;

/// Trait for total extractors.
pub trait TotalExtractor {
    /// Scan already parsed pages.
    fn scan(&self, pages: &[Page]) -> ExtractionResult;

    /// Parse `data` with `parser` and scan the resulting pages.
    ///
    /// A parse failure is returned as is; no partial result is produced.
    fn extract(&self, parser: &dyn DocumentParser, data: &[u8]) -> Result<ExtractionResult> {
        let pages = parser.parse(data)?;
        debug!("Parsed {} pages from {} bytes", pages.len(), data.len());
        Ok(self.scan(&pages))
    }
}
