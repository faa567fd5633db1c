//! Extraction result models: currency codes, total candidates and the
//! final result handed to the display layer.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Currencies the detector can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// UAE dirham.
    Aed,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Indian rupee.
    Inr,
    /// Pound sterling.
    Gbp,
    /// Saudi riyal.
    Sar,
}

impl CurrencyCode {
    /// ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Aed => "AED",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Sar => "SAR",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric value of an amount, used to rank candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountValue {
    /// Value within `Decimal` range.
    Exact(Decimal),
    /// Value too large for `Decimal`.
    Approx(f64),
}

impl AmountValue {
    fn as_f64(&self) -> f64 {
        match self {
            AmountValue::Exact(d) => d.to_f64().unwrap_or(f64::MAX),
            AmountValue::Approx(v) => *v,
        }
    }

    /// Total order by magnitude. Two exact values compare exactly.
    pub fn compare(&self, other: &AmountValue) -> Ordering {
        match (self, other) {
            (AmountValue::Exact(a), AmountValue::Exact(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl Default for AmountValue {
    fn default() -> Self {
        AmountValue::Exact(Decimal::ZERO)
    }
}

impl From<Decimal> for AmountValue {
    fn from(value: Decimal) -> Self {
        AmountValue::Exact(value)
    }
}

/// A total found next to a total label during scanning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Amount exactly as it appeared in the cell, separators included.
    pub amount: String,

    /// Page number (1-indexed).
    pub page: u32,

    /// Text of the label cell the amount was paired with.
    pub label: String,

    /// Numeric value of `amount`, used for ordering.
    #[serde(skip)]
    pub value: AmountValue,
}

impl Candidate {
    pub fn new(amount: impl Into<String>, value: AmountValue, page: u32, label: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            page,
            label: label.into(),
            value,
        }
    }
}

/// Outcome of scanning one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Largest total found, if any.
    pub total: Option<Candidate>,

    /// Currency detected from the page text.
    pub currency: Option<CurrencyCode>,

    /// Number of pages scanned.
    pub page_count: usize,

    /// Number of total candidates considered.
    pub candidate_count: usize,

    /// Processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
}

impl ExtractionResult {
    /// User-facing notes about missing pieces of the result.
    pub fn notes(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.total.is_none() {
            notes.push("No total amount could be found in the document.".to_string());
        }
        if self.currency.is_none() {
            notes.push(
                "Currency not detected. Ensure the currency is mentioned in the PDF.".to_string(),
            );
        }
        notes
    }
}
