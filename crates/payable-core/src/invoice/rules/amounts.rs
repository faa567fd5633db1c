//! Amount extraction from table cells.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::FieldExtractor;
use super::normalize::normalize;
use super::patterns::{AMOUNT_PATTERN, DECIMAL_DIGIT};
use crate::models::result::AmountValue;

/// Amount field extractor.
///
/// Whitespace is removed before matching, so "1 250.00" reads as "1250.00".
/// Thousands groups are not checked for width: "1,23,456" is accepted.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    fn compact(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        AMOUNT_PATTERN
            .find(&Self::compact(text))
            .map(|m| m.as_str().to_string())
    }
}

/// First amount in `cell`, verbatim with its separators.
pub fn extract_amount(cell: &str) -> Option<String> {
    AmountExtractor::new().extract(cell)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// ASCII form of a decimal digit from any script ('٣' -> '3').
///
/// Each script's digits are one contiguous run from zero to nine, so the
/// value is the distance back to the start of the run.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut value = 0;
    let mut code = c as u32;
    while value < 9 {
        match char::from_u32(code - 1) {
            Some(prev) if is_decimal_digit(prev) => {
                value += 1;
                code -= 1;
            }
            _ => break,
        }
    }
    char::from_digit(value, 10)
}

/// Numeric value of an extracted amount ("1,250.00" -> 1250.00).
///
/// Digits of any script are accepted. Values too large for `Decimal` are
/// kept as floating point.
pub fn parse_amount(amount: &str) -> Option<AmountValue> {
    let mut cleaned = String::with_capacity(amount.len());
    for c in normalize(amount).chars() {
        match c {
            ',' => {}
            '.' => cleaned.push('.'),
            _ => cleaned.push(ascii_digit(c)?),
        }
    }

    if let Ok(value) = Decimal::from_str(&cleaned) {
        return Some(AmountValue::Exact(value));
    }
    cleaned.parse::<f64>().ok().map(AmountValue::Approx)
}
