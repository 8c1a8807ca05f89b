//! Search query construction

/// Indexed field a search clause targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// Native OCLC record number
    OclcNumber,
    Isbn,
}

impl SearchField {
    /// Field code used in the query language
    pub fn code(self) -> &'static str {
        match self {
            SearchField::OclcNumber => "no",
            SearchField::Isbn => "bn",
        }
    }
}

/// Build a search URL matching any of `values` on `field`.
///
/// Clauses are joined with `+OR+`; each value is percent-encoded.
///
/// ```
/// use im_worldcat::query::{search_url, SearchField};
///
/// let url = search_url("https://www.worldcat.org", SearchField::OclcNumber, &["1", "2"]);
/// assert_eq!(url, "https://www.worldcat.org/api/search?q=no%3A1+OR+no%3A2");
/// ```
pub fn search_url<S: AsRef<str>>(base_url: &str, field: SearchField, values: &[S]) -> String {
    let query = values
        .iter()
        .map(|value| format!("{}%3A{}", field.code(), urlencoding::encode(value.as_ref())))
        .collect::<Vec<_>>()
        .join("+OR+");

    format!("{}/api/search?q={}", base_url.trim_end_matches('/'), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_isbn_clause() {
        assert_eq!(
            search_url("https://www.worldcat.org/", SearchField::Isbn, &["978-0-585-03015-9"]),
            "https://www.worldcat.org/api/search?q=bn%3A978-0-585-03015-9"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        let url = search_url("https://x.test", SearchField::OclcNumber, &[String::from("a b&c")]);
        assert_eq!(url, "https://x.test/api/search?q=no%3Aa%20b%26c");
    }
}
