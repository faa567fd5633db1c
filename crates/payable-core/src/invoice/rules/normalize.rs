//! Arabic-aware text cleanup applied before currency matching.

use unicode_normalization::UnicodeNormalization;

/// Arabic block, inclusive.
const ARABIC_RANGE: std::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Whether `c` is an Arabic diacritic or Quranic annotation mark.
fn is_arabic_mark(c: char) -> bool {
    matches!(c, '\u{0617}'..='\u{061A}' | '\u{064B}'..='\u{0652}')
}

/// Decompose `text` (NFKD) and drop Arabic diacritics.
///
/// Compatibility decomposition also folds Arabic presentation forms, which
/// many PDF producers emit, back into the base Arabic block.
pub fn normalize(text: &str) -> String {
    text.nfkd().filter(|c| !is_arabic_mark(*c)).collect()
}

/// Whether every character of `token` lies in the Arabic block.
pub fn is_arabic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| ARABIC_RANGE.contains(&c))
}

/// Reverse the characters of each Arabic-only token.
///
/// Text pulled out of PDFs often carries Arabic words in visual order; this
/// puts them back in logical order. Tokens are rejoined with single spaces,
/// so the original spacing is lost.
pub fn reverse_arabic_words(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if is_arabic_token(token) {
                token.chars().rev().collect()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
