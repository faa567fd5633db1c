//! Rule-based extractors for invoice totals and currencies.

pub mod amounts;
pub mod currency;
pub mod labels;
pub mod normalize;
pub mod patterns;

pub use amounts::{extract_amount, parse_amount, AmountExtractor};
pub use currency::{detect_currency, CurrencyDetector};
pub use labels::is_total_label;
pub use normalize::{is_arabic_token, normalize, reverse_arabic_words};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
