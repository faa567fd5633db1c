//! Table recovery from the plain text of a page.
//!
//! Used when a page cannot be read as positioned words. Plain text keeps
//! columns apart with tabs, `|` rules or wide runs of spaces. A line split on
//! those separators into enough cells is a table row, and consecutive rows
//! form one table.

use crate::models::config::PdfConfig;
use crate::models::document::{Row, Table};

/// Split one line of text into cells.
///
/// Tabs and `|` always separate cells. Inside a segment, a run of at least
/// `min_gap` spaces separates cells; shorter runs stay part of the cell.
pub fn split_cells(line: &str, min_gap: usize) -> Row {
    let min_gap = min_gap.max(1);
    let mut cells = Vec::new();

    for segment in line.split(['\t', '|']) {
        let mut current = String::new();
        let mut spaces = 0;

        for c in segment.chars() {
            if c == ' ' || c == '\u{00a0}' {
                spaces += 1;
                continue;
            }
            if spaces > 0 && !current.is_empty() {
                if spaces >= min_gap {
                    cells.push(Some(std::mem::take(&mut current)));
                } else {
                    current.extend(std::iter::repeat_n(' ', spaces));
                }
            }
            spaces = 0;
            current.push(c);
        }

        cells.push(if current.is_empty() { None } else { Some(current) });
    }

    cells
}

/// Number of non-blank cells in a row.
fn filled(row: &Row) -> usize {
    row.iter().filter(|c| c.is_some()).count()
}

/// Group consecutive rows with at least `min_columns` filled cells into
/// tables. Each table keeps the key of its first row.
pub(crate) fn group_rows<K>(
    rows: impl IntoIterator<Item = (K, Row)>,
    min_columns: usize,
) -> Vec<(K, Table)> {
    let min_columns = min_columns.max(1);
    let mut tables = Vec::new();
    let mut current: Option<(K, Vec<Row>)> = None;

    for (key, row) in rows {
        if filled(&row) >= min_columns {
            current.get_or_insert_with(|| (key, Vec::new())).1.push(row);
        } else if let Some((first, rows)) = current.take() {
            tables.push((first, Table::new(rows)));
        }
    }

    if let Some((first, rows)) = current {
        tables.push((first, Table::new(rows)));
    }
    tables
}

/// Recover the tables of one page from its text.
pub fn detect_tables(text: &str, config: &PdfConfig) -> Vec<Table> {
    let rows = text
        .lines()
        .map(|line| ((), split_cells(line, config.min_column_gap)));
    group_rows(rows, config.min_table_columns)
        .into_iter()
        .map(|(_, table)| table)
        .collect()
}
