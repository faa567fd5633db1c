//! End-to-end scanning scenarios over in-memory pages.

use payable_core::invoice::rules::{extract_amount, is_total_label, reverse_arabic_words};
use payable_core::{
    CurrencyCode, DocumentParser, InvoiceScanner, Page, PayableError, PdfError, Table,
    TotalExtractor,
};
use pretty_assertions::assert_eq;

/// Parser stand-in that hands back fixed pages.
struct FixedPages(Vec<Page>);

impl DocumentParser for FixedPages {
    fn parse(&self, _data: &[u8]) -> payable_core::Result<Vec<Page>> {
        Ok(self.0.clone())
    }
}

/// Parser stand-in that always fails.
struct Corrupt;

impl DocumentParser for Corrupt {
    fn parse(&self, _data: &[u8]) -> payable_core::Result<Vec<Page>> {
        Err(PdfError::Parse("invalid cross-reference table".to_string()).into())
    }
}

#[test]
fn total_with_gap_cell_on_second_page() {
    let pages = vec![
        Page::new(1).with_text("ACME Trading LLC"),
        Page::new(2)
            .with_text("All amounts in USD")
            .with_table(Table::from_cells([vec!["Invoice Total", "", "1,250.00"]])),
    ];

    let result = InvoiceScanner::new().scan(&pages);
    let total = result.total.expect("total");

    assert_eq!(total.amount, "1,250.00");
    assert_eq!(total.page, 2);
    assert_eq!(total.label, "Invoice Total");
    assert_eq!(result.currency, Some(CurrencyCode::Usd));
    assert_eq!(result.page_count, 2);
}

#[test]
fn no_tables_and_no_keywords() {
    let pages = vec![Page::new(1).with_text("Delivery note\nShipped to Dubai")];

    let result = InvoiceScanner::new().scan(&pages);

    assert_eq!(result.total, None);
    assert_eq!(result.candidate_count, 0);
    assert_eq!(result.currency, Some(CurrencyCode::Aed));
}

#[test]
fn no_text_at_all() {
    let result = InvoiceScanner::new().scan(&[Page::new(1)]);
    assert_eq!(result.total, None);
    assert_eq!(result.currency, None);
}

#[test]
fn largest_candidate_across_pages_wins() {
    let pages = vec![
        Page::new(1).with_table(Table::from_cells([vec!["Total", "500"]])),
        Page::new(2),
        Page::new(3).with_table(Table::from_cells([vec!["Grand Total", "1,200.50"]])),
    ];

    let result = InvoiceScanner::new().scan(&pages);
    let total = result.total.expect("total");

    assert_eq!(total.amount, "1,200.50");
    assert_eq!(total.page, 3);
    assert_eq!(result.candidate_count, 2);
}

#[test]
fn label_in_last_cell_records_nothing() {
    let pages = vec![Page::new(1).with_table(Table::from_cells([vec!["250.00", "Total"]]))];

    let result = InvoiceScanner::new().scan(&pages);

    assert_eq!(result.total, None);
    assert_eq!(result.candidate_count, 0);
}

#[test]
fn equal_maxima_keep_first_encountered() {
    let pages = vec![
        Page::new(1).with_table(Table::from_cells([
            vec!["Subtotal", "1,000"],
            vec!["Total", "1000.00"],
        ])),
        Page::new(2).with_table(Table::from_cells([vec!["Amount due", "1,000.0"]])),
    ];

    let total = InvoiceScanner::new().scan(&pages).total.expect("total");

    assert_eq!(total.label, "Subtotal");
    assert_eq!(total.page, 1);
}

#[test]
fn lenient_grouping_compares_numerically() {
    let pages = vec![Page::new(1).with_table(Table::from_cells([
        vec!["Total", "1,23,456"],
        vec!["Grand Total", "99,999.99"],
    ]))];

    let total = InvoiceScanner::new().scan(&pages).total.expect("total");

    assert_eq!(total.amount, "1,23,456");
}

#[test]
fn arabic_indic_total_is_recorded() {
    let pages = vec![
        Page::new(1)
            .with_text("المبلغ الإجمالي مهرد")
            .with_table(Table::from_cells([
                vec!["Total", "٩٥٠"],
                vec!["Grand Total", "١٬٢٥٠"],
                vec!["Invoice Total", "١٢٥٠"],
            ])),
    ];

    let result = InvoiceScanner::new().scan(&pages);
    let total = result.total.expect("total");

    assert_eq!(result.candidate_count, 3);
    assert_eq!(total.amount, "١٢٥٠");
    assert_eq!(total.label, "Invoice Total");
    assert_eq!(result.currency, Some(CurrencyCode::Aed));
}

#[test]
fn amount_too_large_for_decimal_still_ranks() {
    let pages = vec![Page::new(1).with_table(Table::from_cells([
        vec!["Total", "5"],
        vec!["Grand Total", "100000000000000000000000000000"],
    ]))];

    let result = InvoiceScanner::new().scan(&pages);

    assert_eq!(result.candidate_count, 2);
    assert_eq!(
        result.total.expect("total").amount,
        "100000000000000000000000000000"
    );
}

#[test]
fn currency_uses_text_of_all_pages() {
    let pages = vec![
        Page::new(1).with_text("Bill to: Mumbai"),
        Page::new(2).with_text("Payable in INR"),
    ];

    let result = InvoiceScanner::new().scan(&pages);

    assert_eq!(result.currency, Some(CurrencyCode::Inr));
}

#[test]
fn aed_beats_usd_when_both_present() {
    let pages = vec![Page::new(1).with_text("Paid in usd, equivalent aed 3,672")];
    assert_eq!(
        InvoiceScanner::new().scan(&pages).currency,
        Some(CurrencyCode::Aed)
    );
}

#[test]
fn extract_runs_parser_then_scan() {
    let parser = FixedPages(vec![
        Page::new(1)
            .with_text("مهرد")
            .with_table(Table::from_cells([vec!["Total Payable", "AED", "4,410.00"]])),
    ]);

    let result = InvoiceScanner::new().extract(&parser, b"%PDF").unwrap();

    assert_eq!(result.total.unwrap().amount, "4,410.00");
    assert_eq!(result.currency, Some(CurrencyCode::Aed));
}

#[test]
fn parse_failure_propagates_with_cause() {
    let err = InvoiceScanner::new().extract(&Corrupt, b"").unwrap_err();

    assert!(matches!(err, PayableError::Pdf(PdfError::Parse(_))));
    assert!(err.to_string().contains("invalid cross-reference table"));
}

#[test]
fn label_matcher_properties() {
    for cell in ["TOTAL PAYABLE", "amount due now", "Grand Total", "invoice total", "Sub-Total"] {
        let lower = cell.to_lowercase();
        let expected = ["total payable", "amount due", "grand total", "invoice total", "total"]
            .iter()
            .any(|k| lower.contains(k));
        assert_eq!(is_total_label(cell), expected, "{cell}");
    }
}

#[test]
fn amount_extractor_leftmost_longest() {
    assert_eq!(extract_amount("USD 12,500.75 incl."), Some("12,500.75".to_string()));
    assert_eq!(extract_amount("no digits here"), None);
}

#[test]
fn arabic_reversal_properties() {
    assert_eq!(reverse_arabic_words("لاير"), "ريال");
    assert_eq!(reverse_arabic_words("AED100"), "AED100");
}
