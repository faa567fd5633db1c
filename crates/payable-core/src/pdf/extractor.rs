//! PDF page extraction using lopdf, pdf-extract and pdfplumber.

use lopdf::Document;
use pdfplumber::Pdf;
use tracing::{debug, trace, warn};

use super::layout::find_tables;
use super::tables::detect_tables;
use super::{DocumentParser, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;
use crate::models::document::{Page, Table};

/// PDF document parser producing pages with text and tables.
pub struct PdfExtractor {
    config: PdfConfig,
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self {
            config: PdfConfig::default(),
        }
    }

    /// Create an extractor with the given settings.
    pub fn with_config(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Load the document, decrypting it when it only has an empty password.
    ///
    /// Returns the document and the bytes pdf-extract should read.
    fn load(&self, data: &[u8]) -> Result<(Document, Vec<u8>)> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if doc.is_encrypted() {
            if !self.config.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        Ok((doc, raw_data))
    }

    /// Extract the text of every page. Pages without usable text are `None`.
    fn page_texts(&self, doc: &Document, raw_data: &[u8]) -> Vec<Option<String>> {
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

        let by_pages = match pdf_extract::extract_text_from_mem_by_pages(raw_data) {
            Ok(texts) if texts.len() == page_numbers.len() => Some(texts),
            Ok(texts) => {
                warn!(
                    "pdf-extract returned {} pages, expected {}; using lopdf text",
                    texts.len(),
                    page_numbers.len()
                );
                None
            }
            Err(e) => {
                warn!("pdf-extract failed ({}); using lopdf text", e);
                None
            }
        };

        match by_pages {
            Some(texts) => texts.into_iter().map(non_blank).collect(),
            None => page_numbers
                .iter()
                .map(|&n| match doc.extract_text(&[n]) {
                    Ok(text) => non_blank(text),
                    Err(e) => {
                        warn!("No text on page {}: {}", n, e);
                        None
                    }
                })
                .collect(),
        }
    }

    /// Tables of the page at `index`, from positioned words when pdfplumber
    /// can read the page, else from its plain text.
    fn page_tables(&self, pdf: Option<&Pdf>, index: usize, text: Option<&str>) -> Vec<Table> {
        if let Some(pdf) = pdf {
            match pdf.page(index) {
                Ok(page) => return find_tables(&page, &self.config),
                Err(e) => warn!("Page {} has no positioned words ({}); using its text", index + 1, e),
            }
        }
        text.map(|t| detect_tables(t, &self.config)).unwrap_or_default()
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for PdfExtractor {
    fn parse(&self, data: &[u8]) -> crate::Result<Vec<Page>> {
        let (doc, raw_data) = self.load(data)?;
        let mut texts = self.page_texts(&doc, &raw_data);

        if self.config.max_pages > 0 && texts.len() > self.config.max_pages {
            debug!("Limiting {} pages to {}", texts.len(), self.config.max_pages);
            texts.truncate(self.config.max_pages);
        }

        let pdf = match Pdf::open(&raw_data, None) {
            Ok(pdf) => Some(pdf),
            Err(e) => {
                warn!("pdfplumber could not open the document ({}); tables from text", e);
                None
            }
        };

        let pages: Vec<Page> = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let tables = self.page_tables(pdf.as_ref(), i, text.as_deref());
                trace!("Page {}: {} tables", i + 1, tables.len());
                Page {
                    number: u32::try_from(i + 1).unwrap_or(u32::MAX),
                    text,
                    tables,
                }
            })
            .collect();

        debug!("Parsed PDF with {} pages", pages.len());
        Ok(pages)
    }
}
