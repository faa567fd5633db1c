//! Table scanner that pairs total labels with the amounts to their right.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::document::{Page, Row};
use crate::models::result::{AmountValue, Candidate, ExtractionResult};

use super::rules::{detect_currency, extract_amount, is_total_label, parse_amount};
use super::TotalExtractor;

/// Scanner over parsed pages.
///
/// Holds no state between documents; one instance can scan any number of
/// documents, including from several threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceScanner;

impl InvoiceScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }
}

impl TotalExtractor for InvoiceScanner {
    fn scan(&self, pages: &[Page]) -> ExtractionResult {
        let start = Instant::now();
        let mut full_text = String::new();
        let mut candidates = Vec::new();

        for page in pages {
            if let Some(text) = page.extract_text() {
                full_text.push_str(text);
                full_text.push('\n');
            }

            let tables = page.extract_tables();
            debug!("Page {}: {} tables", page.number, tables.len());

            for table in tables {
                for row in &table.rows {
                    candidates.extend(scan_row(row, page.number));
                }
            }
        }

        let currency = detect_currency(&full_text);
        let candidate_count = candidates.len();
        debug!(
            "Collected {} total candidates from {} pages, currency {:?}",
            candidate_count,
            pages.len(),
            currency
        );

        let total = select_total(candidates);
        if let Some(ref t) = total {
            info!("Selected total {} from page {} ('{}')", t.amount, t.page, t.label);
        }

        ExtractionResult {
            total,
            currency,
            page_count: pages.len(),
            candidate_count,
            processing_time_ms: Some(start.elapsed().as_millis() as u64),
        }
    }
}

/// Collect the candidates of one table row.
///
/// Every cell that reads as a total label is paired with the first amount
/// found strictly to its right. A label with no amount after it yields
/// nothing; later labels in the same row are still considered.
pub fn scan_row(row: &Row, page: u32) -> Vec<Candidate> {
    let cells: Vec<&str> = row
        .iter()
        .map(|c| c.as_deref().unwrap_or("").trim())
        .collect();

    let mut found = Vec::new();
    for (i, label) in cells.iter().enumerate() {
        if !is_total_label(label) {
            continue;
        }

        if let Some((amount, value)) = amount_right_of(&cells, i) {
            found.push(Candidate::new(amount, value, page, *label));
        }
    }
    found
}

/// First amount in the cells after `index`, with its value.
pub fn amount_right_of(cells: &[&str], index: usize) -> Option<(String, AmountValue)> {
    cells.iter().skip(index + 1).find_map(|cell| {
        let amount = extract_amount(cell)?;
        match parse_amount(&amount) {
            Some(value) => Some((amount, value)),
            None => {
                warn!("Cell '{}' has no readable amount, scanning on", cell);
                None
            }
        }
    })
}

/// Pick the largest candidate. Equal values keep their scan order, so the
/// earliest one wins.
pub fn select_total(mut candidates: Vec<Candidate>) -> Option<Candidate> {
    // sort_by is stable
    candidates.sort_by(|a, b| b.value.compare(&a.value));
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn row(cells: &[&str]) -> Row {
        cells
            .iter()
            .map(|c| if c.is_empty() { None } else { Some(c.to_string()) })
            .collect()
    }

    #[test]
    fn test_scan_row_skips_empty_cells() {
        let found = scan_row(&row(&["Invoice Total", "", "1,250.00"]), 2);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount, "1,250.00");
        assert_eq!(found[0].label, "Invoice Total");
        assert_eq!(found[0].page, 2);
    }

    #[test]
    fn test_scan_row_label_last_cell() {
        assert!(scan_row(&row(&["100.00", "Total"]), 1).is_empty());
    }

    #[test]
    fn test_scan_row_multiple_labels() {
        let found = scan_row(&row(&["Subtotal", "90.00", "Total", "99.00"]), 1);
        let amounts: Vec<&str> = found.iter().map(|c| c.amount.as_str()).collect();
        assert_eq!(amounts, vec!["90.00", "99.00"]);
    }

    #[test]
    fn test_scan_row_label_to_the_right_of_label() {
        // "Total" itself has no digits, so the scan walks past it
        let found = scan_row(&row(&["Grand Total", "Total", "10"]), 1);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].amount, "10");
        assert_eq!(found[0].label, "Grand Total");
    }

    #[test]
    fn test_scan_row_trims_label() {
        let found = scan_row(&row(&["  Amount Due ", "AED 75"]), 1);
        assert_eq!(found[0].label, "Amount Due");
        assert_eq!(found[0].value, AmountValue::Exact(Decimal::from(75)));
    }

    #[test]
    fn test_select_total_stable_on_ties() {
        let candidates = vec![
            Candidate::new("100", Decimal::from(100).into(), 1, "Total"),
            Candidate::new("100.00", Decimal::new(10000, 2).into(), 2, "Grand Total"),
            Candidate::new("5", Decimal::from(5).into(), 3, "Subtotal"),
        ];
        let best = select_total(candidates).unwrap();
        assert_eq!(best.page, 1);
        assert_eq!(best.amount, "100");
    }

    #[test]
    fn test_scan_row_arabic_indic_amount() {
        let found = scan_row(&row(&["Total", "١٢٥٠"]), 1);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount, "١٢٥٠");
        assert_eq!(found[0].value, AmountValue::Exact(Decimal::from(1250)));
    }

    #[test]
    fn test_amount_beyond_decimal_range_still_wins() {
        let mut candidates = scan_row(&row(&["Total", "5"]), 1);
        candidates.extend(scan_row(
            &row(&["Grand Total", "100000000000000000000000000000"]),
            1,
        ));
        assert_eq!(candidates.len(), 2);

        let best = select_total(candidates).unwrap();
        assert_eq!(best.amount, "100000000000000000000000000000");
        assert_eq!(best.label, "Grand Total");
    }

    #[test]
    fn test_select_total_empty() {
        assert_eq!(select_total(Vec::new()), None);
    }
}
