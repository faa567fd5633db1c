//! Total label matching for table cells.

use super::patterns::TOTAL_KEYWORDS;

/// Whether `cell` reads like a total label ("Grand Total", "Amount due", ...).
///
/// Plain substring match on the lowercased cell, so "Subtotal" and
/// "Total VAT" qualify as well.
pub fn is_total_label(cell: &str) -> bool {
    if cell.is_empty() {
        return false;
    }
    let lower = cell.to_lowercase();
    TOTAL_KEYWORDS.iter().any(|k| lower.contains(k))
}
