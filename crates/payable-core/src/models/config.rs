//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PayableError, Result};

/// Main configuration for payable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayableConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Output configuration for the command-line shell.
    pub output: OutputConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,

    /// Minimum gap between two columns, in spaces (character widths for
    /// positioned words).
    pub min_column_gap: usize,

    /// Minimum number of filled cells a line needs to count as a table row.
    pub min_table_columns: usize,

    /// Try the empty password on encrypted PDFs.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_column_gap: 2,
            min_table_columns: 2,
            decrypt_empty_password: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: "text", "json" or "csv".
    pub format: String,

    /// Print how many total candidates were considered.
    pub show_candidates_count: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            show_candidates_count: false,
        }
    }
}

impl PayableConfig {
    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| PayableError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| PayableError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
