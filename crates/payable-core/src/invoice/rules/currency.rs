//! Currency detection from free-form invoice text.

use tracing::trace;

use super::FieldExtractor;
use super::normalize::{normalize, reverse_arabic_words};
use super::patterns::CURRENCY_PATTERNS;
use crate::models::result::CurrencyCode;

/// Currency detector over the fixed signature table.
pub struct CurrencyDetector;

impl CurrencyDetector {
    pub fn new() -> Self {
        Self
    }

    /// Normalize, restore Arabic word order and lowercase.
    fn prepare(text: &str) -> String {
        reverse_arabic_words(&normalize(text)).to_lowercase()
    }
}

impl Default for CurrencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CurrencyDetector {
    type Output = CurrencyCode;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        if text.is_empty() {
            return None;
        }

        let prepared = Self::prepare(text);
        for (code, patterns) in CURRENCY_PATTERNS.iter() {
            if let Some(pattern) = patterns.iter().find(|p| p.is_match(&prepared)) {
                trace!("Currency {} matched by /{}/", code, pattern.as_str());
                return Some(*code);
            }
        }
        None
    }
}

/// Detect the currency mentioned in `text`, first match in table order.
pub fn detect_currency(text: &str) -> Option<CurrencyCode> {
    CurrencyDetector::new().extract(text)
}
