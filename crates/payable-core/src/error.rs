//! Error types for the payable-core library.

use thiserror::Error;

/// Main error type for the payable library.
#[derive(Error, Debug)]
pub enum PayableError {
    /// The document could not be read as a PDF.
    #[error("{0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for `PayableConfig`.
    #[error("invalid configuration in {path}: {message}")]
    Config { path: String, message: String },
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the payable library.
pub type Result<T> = std::result::Result<T, PayableError>;
