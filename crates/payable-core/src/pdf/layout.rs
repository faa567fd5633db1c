//! Tables from positioned text, backed by pdfplumber.
//!
//! Ruled tables come from pdfplumber's lattice finder. Words outside them
//! are grouped into lines by their top edge, and a line is split into cells
//! wherever two neighbouring words sit further apart than the column gap.

use pdfplumber::{TableSettings, WordOptions};
use tracing::trace;

use super::tables::group_rows;
use crate::models::config::PdfConfig;
use crate::models::document::{Row, Table};

/// Words whose tops differ by at most this many points share a line.
const LINE_TOLERANCE: f64 = 3.0;

/// A word and its horizontal extent and top edge, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub x0: f64,
    pub x1: f64,
    pub top: f64,
}

impl PlacedWord {
    pub fn new(text: impl Into<String>, x0: f64, x1: f64, top: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
        }
    }

    /// Average advance of one character of the word.
    fn char_width(&self) -> f64 {
        let count = self.text.chars().count().max(1);
        (self.x1 - self.x0) / count as f64
    }
}

impl From<&pdfplumber::Word> for PlacedWord {
    fn from(word: &pdfplumber::Word) -> Self {
        Self::new(word.text.clone(), word.bbox.x0, word.bbox.x1, word.bbox.top)
    }
}

/// Find the tables of one page, top to bottom.
pub fn find_tables(page: &pdfplumber::Page, config: &PdfConfig) -> Vec<Table> {
    let ruled = page.find_tables(&TableSettings::default());

    let mut placed: Vec<(f64, Table)> = ruled
        .iter()
        .map(|table| {
            let rows = table.rows.iter().map(|row| cells_to_row(row)).collect();
            (table.bbox.top, Table::new(rows))
        })
        .collect();

    let loose: Vec<PlacedWord> = page
        .extract_words(&WordOptions::default())
        .iter()
        .filter(|word| !ruled.iter().any(|table| covers(table, word)))
        .map(PlacedWord::from)
        .collect();

    trace!(
        "{} ruled tables, {} words outside them",
        placed.len(),
        loose.len()
    );

    placed.extend(word_tables(&loose, config));
    placed.sort_by(|a, b| a.0.total_cmp(&b.0));
    placed.into_iter().map(|(_, table)| table).collect()
}

fn cells_to_row(cells: &[pdfplumber::Cell]) -> Row {
    cells
        .iter()
        .map(|cell| {
            cell.text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        })
        .collect()
}

/// Whether the centre of `word` lies inside `table`.
fn covers(table: &pdfplumber::Table, word: &pdfplumber::Word) -> bool {
    let cx = (word.bbox.x0 + word.bbox.x1) / 2.0;
    let cy = (word.bbox.top + word.bbox.bottom) / 2.0;
    cx >= table.bbox.x0 && cx <= table.bbox.x1 && cy >= table.bbox.top && cy <= table.bbox.bottom
}

/// Group words into lines, each sorted left to right, lines top to bottom.
pub fn word_lines(words: &[PlacedWord]) -> Vec<Vec<&PlacedWord>> {
    let mut sorted: Vec<&PlacedWord> = words.iter().collect();
    sorted.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.x0.total_cmp(&b.x0)));

    let mut lines: Vec<Vec<&PlacedWord>> = Vec::new();
    for word in sorted {
        match lines.last_mut() {
            Some(line) if word.top - line[0].top <= LINE_TOLERANCE => line.push(word),
            _ => lines.push(vec![word]),
        }
    }

    for line in &mut lines {
        line.sort_by(|a, b| a.x0.total_cmp(&b.x0));
    }
    lines
}

/// Split one line of words into cells.
///
/// A gap of at least `min_gap` character widths starts a new cell; words
/// closer together are joined with a single space.
pub fn split_line(line: &[&PlacedWord], min_gap: usize) -> Row {
    let threshold = min_gap.max(1) as f64 - 0.5;
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut prev: Option<&PlacedWord> = None;

    for word in line {
        if let Some(prev) = prev {
            let gap = word.x0 - prev.x1;
            let char_width = prev.char_width().max(word.char_width());
            if gap >= threshold * char_width {
                cells.push(Some(std::mem::take(&mut current)));
            } else {
                current.push(' ');
            }
        }
        current.push_str(&word.text);
        prev = Some(*word);
    }

    if !current.is_empty() {
        cells.push(Some(current));
    }
    cells
}

/// Tables made of consecutive multi-cell lines, keyed by their top edge.
pub fn word_tables(words: &[PlacedWord], config: &PdfConfig) -> Vec<(f64, Table)> {
    let rows = word_lines(words)
        .into_iter()
        .map(|line| (line[0].top, split_line(&line, config.min_column_gap)));
    group_rows(rows, config.min_table_columns)
}
