//! Brief records and their disposition
//!
//! The catalog returns loosely typed "brief records". They are never
//! interpreted here beyond spotting a cross-reference identifier; everything
//! else is left for the downstream normalizer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One search result, kept as the service sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Wrap a JSON object; anything else is not a record
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Non-empty `doi` string, untrimmed
    pub fn doi(&self) -> Option<&str> {
        self.get("doi")
            .and_then(Value::as_str)
            .filter(|doi| !doi.is_empty())
    }

    /// `oclcNumber` as text; the service sends either a string or a number
    pub fn oclc_number(&self) -> Option<String> {
        match self.get("oclcNumber")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Body of a search response
///
/// Elements stay untyped until consumed, so one malformed entry does not
/// spoil the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "briefRecords", default)]
    brief_records: Option<Vec<Value>>,
}

impl SearchResponse {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Every element that is a record; others are skipped
    pub fn into_records(self) -> Vec<RawRecord> {
        self.brief_records
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| {
                let record = RawRecord::from_value(value);
                if record.is_none() {
                    tracing::debug!("skipping brief record that is not an object");
                }
                record
            })
            .collect()
    }

    /// The first element, if it is a record
    pub fn into_first_record(self) -> Option<RawRecord> {
        self.brief_records?
            .into_iter()
            .next()
            .and_then(RawRecord::from_value)
    }
}

/// Identifier that should be resolved through a dedicated lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CrossReference {
    Doi(String),
}

/// What should happen to a record after it is fetched
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "disposition", content = "record", rename_all = "lowercase")]
pub enum RecordDisposition {
    /// Hand the identifier to a cross-reference resolver; drop the record
    Redirect(CrossReference),
    /// Pass the record unchanged to the normalizer
    Normalize(RawRecord),
}

impl RecordDisposition {
    pub fn classify(record: RawRecord) -> Self {
        match record.doi() {
            Some(doi) => RecordDisposition::Redirect(CrossReference::Doi(doi.to_string())),
            None => RecordDisposition::Normalize(record),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, RecordDisposition::Redirect(_))
    }
}

/// Receives dispositions as soon as each query returns
pub trait RecordSink {
    fn accept(&mut self, disposition: RecordDisposition);
}

impl RecordSink for Vec<RecordDisposition> {
    fn accept(&mut self, disposition: RecordDisposition) {
        self.push(disposition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_doi_redirects() {
        let rec = record(json!({"oclcNumber": "1", "doi": "10.1016/j.asieco.2009.02.011"}));
        assert_eq!(
            RecordDisposition::classify(rec),
            RecordDisposition::Redirect(CrossReference::Doi(
                "10.1016/j.asieco.2009.02.011".to_string()
            ))
        );
    }

    #[test]
    fn test_whitespace_doi_still_redirects() {
        let disposition = RecordDisposition::classify(record(json!({"doi": " "})));
        assert_eq!(
            disposition,
            RecordDisposition::Redirect(CrossReference::Doi(" ".to_string()))
        );
    }

    #[test]
    fn test_empty_or_non_string_doi_normalizes() {
        for value in [json!({"doi": ""}), json!({"doi": null}), json!({"doi": 10}), json!({"title": "x"})] {
            let disposition = RecordDisposition::classify(record(value));
            assert!(!disposition.is_redirect());
        }
    }

    #[test]
    fn test_oclc_number_string_or_number() {
        assert_eq!(record(json!({"oclcNumber": "42854423"})).oclc_number().as_deref(), Some("42854423"));
        assert_eq!(record(json!({"oclcNumber": 42854423})).oclc_number().as_deref(), Some("42854423"));
        assert_eq!(record(json!({})).oclc_number(), None);
    }

    #[test]
    fn test_missing_brief_records_is_empty() {
        let response = SearchResponse::from_value(json!({"numberOfRecords": 0})).unwrap();
        assert!(response.into_records().is_empty());

        let response = SearchResponse::from_value(json!({"briefRecords": [{"a": 1}, {"b": 2}]})).unwrap();
        assert_eq!(response.into_records().len(), 2);
    }

    #[test]
    fn test_malformed_element_does_not_spoil_response() {
        let body = json!({"briefRecords": [{"oclcNumber": "1"}, "oops", {"oclcNumber": "3"}]});

        let first = SearchResponse::from_value(body.clone()).unwrap().into_first_record();
        assert_eq!(first.and_then(|r| r.oclc_number()).as_deref(), Some("1"));

        let all = SearchResponse::from_value(body).unwrap().into_records();
        let numbers: Vec<_> = all.iter().filter_map(RawRecord::oclc_number).collect();
        assert_eq!(numbers, vec!["1", "3"]);
    }

    #[test]
    fn test_first_record_of_empty_response() {
        let response = SearchResponse::from_value(json!({"briefRecords": []})).unwrap();
        assert!(response.into_first_record().is_none());
        assert!(RawRecord::from_value(json!([1, 2])).is_none());
    }
}
