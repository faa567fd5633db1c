//! Fixed keyword lists and regex tables used by the extraction rules.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use super::normalize::normalize;
use crate::models::result::CurrencyCode;

/// Keywords that mark a table cell as a total label. Matched as lowercase
/// substrings, so "subtotal" also counts.
pub const TOTAL_KEYWORDS: &[&str] = &[
    "total payable",
    "amount due",
    "grand total",
    "invoice total",
    "total",
];

/// Currency signatures in detection order. The first currency with any
/// matching pattern wins, so this must stay an ordered slice.
pub const CURRENCY_SIGNATURES: &[(CurrencyCode, &[&str])] = &[
    (
        CurrencyCode::Aed,
        &[r"درهم", r"بالدرهم", r"\buae\b", r"dubai", r"emirates", r"aed", r"د\.إ"],
    ),
    (CurrencyCode::Usd, &[r"usd", r"\$", r"usa"]),
    (CurrencyCode::Eur, &[r"euros?", r"€", r"\beu\b"]),
    (CurrencyCode::Inr, &[r"inr", r"₹", r"rupees?"]),
    (CurrencyCode::Gbp, &[r"gbp", r"£", r"pounds?"]),
    (CurrencyCode::Sar, &[r"sar", r"﷼", r"saudi"]),
];

lazy_static! {
    /// Digits, optional comma groups (grouping width not checked), optional 1-2 decimals.
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"\d+(?:,\d+)*(?:\.\d{1,2})?"
    ).unwrap();

    /// A single decimal digit of any script, as `\d` in `AMOUNT_PATTERN` reads it.
    pub static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").unwrap();

    /// Compiled currency signatures, same order as `CURRENCY_SIGNATURES`.
    pub static ref CURRENCY_PATTERNS: Vec<(CurrencyCode, Vec<Regex>)> = CURRENCY_SIGNATURES
        .iter()
        .map(|(code, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| {
                    RegexBuilder::new(&normalize(p))
                        .case_insensitive(true)
                        .build()
                        .unwrap()
                })
                .collect();
            (*code, compiled)
        })
        .collect();
}
