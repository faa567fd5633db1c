//! Data models shared by the parser, the scanner and the CLI.

pub mod config;
pub mod document;
pub mod result;

pub use config::{OutputConfig, PayableConfig, PdfConfig};
pub use document::{Page, Row, Table};
pub use result::{Candidate, CurrencyCode, ExtractionResult};
