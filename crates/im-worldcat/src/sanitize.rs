//! Input sanitation for search items
//!
//! Host applications hand over search items as loose JSON objects, e.g.
//! `{"ISBN": "0-306-40615-2"}` or `{"identifiers": {"oclc": "42854423"}}`.
//! Only items with a checksum-valid ISBN or an all-digit OCLC number survive.

use im_isbn::clean_isbn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One identifier-bearing search item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(
        rename = "ISBN",
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<ItemIdentifiers>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIdentifiers {
    #[serde(default, deserialize_with = "string_only", skip_serializing_if = "Option::is_none")]
    pub oclc: Option<String>,
}

impl SearchItem {
    pub fn with_isbn(isbn: impl Into<String>) -> Self {
        Self {
            isbn: Some(isbn.into()),
            identifiers: None,
        }
    }

    pub fn with_oclc(oclc: impl Into<String>) -> Self {
        Self {
            isbn: None,
            identifiers: Some(ItemIdentifiers {
                oclc: Some(oclc.into()),
            }),
        }
    }

    pub fn oclc(&self) -> Option<&str> {
        self.identifiers.as_ref()?.oclc.as_deref()
    }
}

/// Non-string values are treated as absent
fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<SearchItem>),
    One(SearchItem),
}

/// Parse a single search item or an array of them
pub fn parse_items(json: &str) -> Result<Vec<SearchItem>, serde_json::Error> {
    Ok(match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

fn sanitize_item(item: &SearchItem) -> Option<SearchItem> {
    let isbn = item.isbn.as_deref().and_then(clean_isbn);
    let oclc = item
        .oclc()
        .map(str::trim)
        .filter(|oclc| !oclc.is_empty() && oclc.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string);

    if isbn.is_none() && oclc.is_none() {
        return None;
    }

    Some(SearchItem {
        isbn,
        identifiers: item
            .identifiers
            .as_ref()
            .map(|_| ItemIdentifiers { oclc }),
    })
}

/// Keep usable items, with ISBNs cleaned and OCLC numbers trimmed
pub fn sanitize(items: &[SearchItem]) -> Vec<SearchItem> {
    items.iter().filter_map(sanitize_item).collect()
}

/// Whether any item carries a usable identifier
pub fn detect(items: &[SearchItem]) -> bool {
    items.iter().any(|item| sanitize_item(item).is_some())
}

/// Identifiers to resolve, split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierBatch {
    isbns: Vec<String>,
    oclc_numbers: Vec<String>,
}

impl IdentifierBatch {
    pub fn new(isbns: Vec<String>, oclc_numbers: Vec<String>) -> Self {
        Self {
            isbns,
            oclc_numbers,
        }
    }

    /// Sanitize and split items. An item with an OCLC number contributes only
    /// that number, even when it also has an ISBN.
    pub fn from_items(items: &[SearchItem]) -> Self {
        let mut batch = Self::default();
        for item in sanitize(items) {
            let oclc = item.identifiers.and_then(|ids| ids.oclc);
            match (oclc, item.isbn) {
                (Some(oclc), _) => batch.oclc_numbers.push(oclc),
                (None, Some(isbn)) => batch.isbns.push(isbn),
                (None, None) => {}
            }
        }
        batch
    }

    pub fn isbns(&self) -> &[String] {
        &self.isbns
    }

    pub fn oclc_numbers(&self) -> &[String] {
        &self.oclc_numbers
    }

    pub fn is_empty(&self) -> bool {
        self.isbns.is_empty() && self.oclc_numbers.is_empty()
    }
}
