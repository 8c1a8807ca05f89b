//! ISBN checksum validation and cleaning

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Hyphen-like separators: ASCII hyphen, soft hyphen, U+2010..U+2015, U+2043, U+2212
    static ref HYPHENS: Regex = Regex::new(r"[\x2D\xAD\u{2010}-\u{2015}\u{2043}\u{2212}]+").unwrap();

    // ISBN-13 or ISBN-10 candidates, whitespace allowed between digits.
    // Digits and word boundaries are ASCII only, so adjacent non-Latin text is a boundary.
    static ref ISBN_CANDIDATE: Regex = Regex::new(
        r"(?-u:\b)(?:97[89]\s*(?:[0-9]\s*){9}[0-9]|(?:[0-9]\s*){9}[0-9X])(?-u:\b)"
    )
    .unwrap();
}

/// Check an ISBN-10 or ISBN-13 checksum, ignoring hyphens and spaces.
pub fn is_valid_isbn(isbn: &str) -> bool {
    let normalized: String = isbn
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect::<String>()
        .to_uppercase();

    match normalized.len() {
        10 => validate_isbn10(&normalized),
        13 => validate_isbn13(&normalized),
        _ => false,
    }
}

/// Extract the first checksum-valid ISBN from free text.
///
/// Separators are dropped and `x` is uppercased, so
/// `"ISBN 978-0-585-03015-9"` yields `"9780585030159"`.
pub fn clean_isbn(text: &str) -> Option<String> {
    let upper = text.to_uppercase();
    let stripped = HYPHENS.replace_all(&upper, "");

    ISBN_CANDIDATE
        .find_iter(&stripped)
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
        })
        .find(|candidate| is_valid_isbn(candidate))
}

/// Validate ISBN-10 checksum
fn validate_isbn10(isbn: &str) -> bool {
    if isbn.len() != 10 {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in isbn.chars().enumerate() {
        let value = match c {
            'X' if i == 9 => 10,
            _ => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += value * (10 - i as u32);
    }

    sum % 11 == 0
}

/// Validate ISBN-13 checksum
fn validate_isbn13(isbn: &str) -> bool {
    if isbn.len() != 13 {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in isbn.chars().enumerate() {
        let Some(value) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { value } else { value * 3 };
    }

    sum % 10 == 0
}
