//! ISBN hyphenation
//!
//! Splits a bare ISBN-10 or ISBN-13 into prefix, registration group,
//! registrant, publication and check digit using a [`RangeTable`]. Failure is
//! reported as `None`; callers fall back to the bare digits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range_table::{match_registrant, RangeTable, LEGACY_PREFIX};

/// Segments of a hyphenated ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnParts {
    /// EAN prefix; absent for ISBN-10 input
    pub prefix: Option<String>,
    pub group: String,
    pub registrant: String,
    pub publication: String,
    pub check_digit: char,
}

impl fmt::Display for IsbnParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{}-", prefix)?;
        }
        write!(
            f,
            "{}-{}-{}-{}",
            self.group, self.registrant, self.publication, self.check_digit
        )
    }
}

impl RangeTable {
    /// Split a bare ISBN into its segments.
    ///
    /// Accepts exactly 10 characters (nine digits and a digit or `X`) or 13
    /// digits. The check digit is not verified.
    pub fn split(&self, isbn: &str) -> Option<IsbnParts> {
        let (prefix, digits) = match isbn.len() {
            10 if is_isbn10_shape(isbn) => (None, isbn),
            13 if isbn.bytes().all(|b| b.is_ascii_digit()) => {
                let (prefix, rest) = isbn.split_at(3);
                if !self.has_prefix(prefix) {
                    return None;
                }
                (Some(prefix), rest)
            }
            _ => return None,
        };

        let namespace = prefix.unwrap_or(LEGACY_PREFIX);
        let (group, ranges) = self.lookup_group(namespace, digits)?;
        let rest = &digits[group.len()..];
        let registrant = match_registrant(ranges, rest)?;
        let tail = &rest[registrant.len()..];
        let (publication, check) = tail.split_at(tail.len() - 1);

        Some(IsbnParts {
            prefix: prefix.map(str::to_string),
            group: group.to_string(),
            registrant: registrant.to_string(),
            publication: publication.to_string(),
            check_digit: check.chars().next()?,
        })
    }

    /// Hyphenate a bare ISBN, or `None` when the ranges do not cover it.
    pub fn hyphenate(&self, isbn: &str) -> Option<String> {
        self.split(isbn).map(|parts| parts.to_string())
    }
}

fn is_isbn10_shape(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    bytes[..9].iter().all(u8::is_ascii_digit)
        && (bytes[9].is_ascii_digit() || bytes[9] == b'X' || bytes[9] == b'x')
}

/// Split using the standard range table
pub fn split_isbn(isbn: &str) -> Option<IsbnParts> {
    RangeTable::standard().split(isbn)
}

/// Hyphenate using the standard range table
pub fn hyphenate_isbn(isbn: &str) -> Option<String> {
    RangeTable::standard().hyphenate(isbn)
}

/// Hyphenate with the standard table, or hand back the input unchanged.
pub fn hyphenate_or_bare(isbn: &str) -> String {
    match hyphenate_isbn(isbn) {
        Some(hyphenated) => hyphenated,
        None => {
            tracing::debug!(isbn, "no registrant range covers ISBN; keeping bare digits");
            isbn.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenate_isbn13() {
        assert_eq!(
            hyphenate_isbn("9780585030159"),
            Some("978-0-585-03015-9".to_string())
        );
        assert_eq!(
            hyphenate_isbn("9798218450144"),
            Some("979-8-218-45014-4".to_string())
        );
    }

    #[test]
    fn test_hyphenate_isbn10_has_no_prefix() {
        assert_eq!(
            hyphenate_isbn("0585030159"),
            Some("0-585-03015-9".to_string())
        );
        assert_eq!(
            hyphenate_isbn("080442957X"),
            Some("0-8044-2957-X".to_string())
        );
    }

    #[test]
    fn test_split_segments() {
        let parts = split_isbn("9780585030159").unwrap();
        assert_eq!(parts.prefix.as_deref(), Some("978"));
        assert_eq!(parts.group, "0");
        assert_eq!(parts.registrant, "585");
        assert_eq!(parts.publication, "03015");
        assert_eq!(parts.check_digit, '9');
    }

    #[test]
    fn test_unknown_prefix_fails() {
        assert_eq!(hyphenate_isbn("9770585030159"), None);
    }

    #[test]
    fn test_wrong_length_or_characters_fail() {
        assert_eq!(hyphenate_isbn(""), None);
        assert_eq!(hyphenate_isbn("978058503015"), None);
        assert_eq!(hyphenate_isbn("978-0-585-03015-9"), None);
        assert_eq!(hyphenate_isbn("978058503015X"), None);
        assert_eq!(hyphenate_isbn("05850301é"), None);
    }

    #[test]
    fn test_hyphenate_or_bare() {
        assert_eq!(hyphenate_or_bare("9780585030159"), "978-0-585-03015-9");
        assert_eq!(hyphenate_or_bare("9770585030159"), "9770585030159");
    }
}
