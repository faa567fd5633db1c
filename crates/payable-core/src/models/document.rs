//! Page and table structures handed from a document parser to the scanner.

use serde::{Deserialize, Serialize};

/// One row of a table. Cells may be absent when the source grid had a gap.
pub type Row = Vec<Option<String>>;

/// A table recovered from a page, as an ordered list of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a table from string cells, treating blank cells as absent.
    pub fn from_cells<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        if cell.trim().is_empty() {
                            None
                        } else {
                            Some(cell.to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single parsed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text, `None` when the page yielded no text.
    pub text: Option<String>,
    /// Tables found on this page.
    pub tables: Vec<Table>,
}

impl Page {
    /// Create a page with no text and no tables.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            text: None,
            tables: Vec::new(),
        }
    }

    /// Set the page text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a table to the page.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Text extracted from the page, if any.
    pub fn extract_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Tables extracted from the page.
    pub fn extract_tables(&self) -> &[Table] {
        &self.tables
    }
}
