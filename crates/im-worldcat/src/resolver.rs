//! Identifier resolution pipeline
//!
//! One resolution runs as a single task: canonicalize ISBNs, bootstrap a
//! session, run the batched native-number query, then query each ISBN in
//! turn. Requests are awaited strictly one after another to keep load on the
//! remote index low. Every record is handed to the caller's [`RecordSink`] as
//! soon as its query returns, so dropping the future keeps what was already
//! delivered.

use im_isbn::RangeTable;
use serde::Serialize;

use crate::config::CatalogConfig;
use crate::error::{ResolveError, Result};
use crate::http::{HttpError, Transport};
use crate::query::{search_url, SearchField};
use crate::record::{RawRecord, RecordDisposition, RecordSink, SearchResponse};
use crate::sanitize::IdentifierBatch;
use crate::session::{Session, SessionBootstrapper};

/// Outcome counts of one resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveSummary {
    /// Records returned by the native-number batch query
    pub native_records: usize,
    /// Records taken from per-ISBN queries (at most one per ISBN)
    pub isbn_records: usize,
    /// Records redirected to cross-reference resolution
    pub redirected: usize,
    /// ISBNs whose query failed
    pub failed_isbns: Vec<String>,
    /// ISBNs whose query returned no record
    pub unmatched_isbns: Vec<String>,
    pub native_query_failed: bool,
}

impl ResolveSummary {
    pub fn total_records(&self) -> usize {
        self.native_records + self.isbn_records
    }

    /// No identifier could be resolved
    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}

/// Resolves identifier batches against the catalog
pub struct IdentifierResolver<T: Transport> {
    transport: T,
    config: CatalogConfig,
    bootstrapper: SessionBootstrapper,
    table: &'static RangeTable,
}

impl<T: Transport> IdentifierResolver<T> {
    pub fn new(transport: T, config: CatalogConfig) -> Self {
        Self {
            transport,
            bootstrapper: SessionBootstrapper::new(config.clone()),
            config,
            table: RangeTable::standard(),
        }
    }

    /// Use a different range table for canonicalization
    pub fn with_range_table(mut self, table: &'static RangeTable) -> Self {
        self.table = table;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Bootstrap a session without resolving anything
    pub async fn session(&self) -> Result<Session> {
        self.bootstrapper.bootstrap(&self.transport).await
    }

    /// Resolve `batch`, streaming each record's disposition into `sink`.
    ///
    /// Fails only when the batch is empty or no session can be obtained.
    /// A failed query is logged and skipped.
    pub async fn resolve<S>(&self, batch: &IdentifierBatch, sink: &mut S) -> Result<ResolveSummary>
    where
        S: RecordSink + ?Sized,
    {
        if batch.is_empty() {
            return Err(ResolveError::EmptyBatch);
        }

        let isbns: Vec<(&str, String)> = batch
            .isbns()
            .iter()
            .map(|isbn| (isbn.as_str(), self.canonicalize(isbn)))
            .collect();

        let session = self.session().await?;
        let mut summary = ResolveSummary::default();

        if !batch.oclc_numbers().is_empty() {
            match self
                .search(&session, SearchField::OclcNumber, batch.oclc_numbers())
                .await
            {
                Ok(response) => {
                    let records = response.into_records();
                    summary.native_records = records.len();
                    for record in records {
                        Self::deliver(record, sink, &mut summary);
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        count = batch.oclc_numbers().len(),
                        %error,
                        "native number query failed"
                    );
                    summary.native_query_failed = true;
                }
            }
        }

        for (input, canonical) in &isbns {
            match self
                .search(&session, SearchField::Isbn, std::slice::from_ref(canonical))
                .await
            {
                Ok(response) => match response.into_first_record() {
                    Some(record) => {
                        summary.isbn_records += 1;
                        Self::deliver(record, sink, &mut summary);
                    }
                    None => {
                        tracing::debug!(isbn = %canonical, "no record for ISBN");
                        summary.unmatched_isbns.push(input.to_string());
                    }
                },
                Err(error) => {
                    tracing::warn!(isbn = %canonical, %error, "ISBN query failed; continuing");
                    summary.failed_isbns.push(input.to_string());
                }
            }
        }

        if summary.is_empty() {
            tracing::info!("no identifiers could be resolved");
        } else {
            tracing::info!(
                native = summary.native_records,
                isbn = summary.isbn_records,
                redirected = summary.redirected,
                failed = summary.failed_isbns.len(),
                "resolution finished"
            );
        }

        Ok(summary)
    }

    /// Resolve and collect every disposition
    pub async fn resolve_collect(
        &self,
        batch: &IdentifierBatch,
    ) -> Result<(Vec<RecordDisposition>, ResolveSummary)> {
        let mut records = Vec::new();
        let summary = self.resolve(batch, &mut records).await?;
        Ok((records, summary))
    }

    fn canonicalize(&self, isbn: &str) -> String {
        match self.table.hyphenate(isbn) {
            Some(hyphenated) => hyphenated,
            None => {
                tracing::debug!(isbn, "no range for ISBN; querying bare digits");
                isbn.to_string()
            }
        }
    }

    async fn search(
        &self,
        session: &Session,
        field: SearchField,
        values: &[String],
    ) -> std::result::Result<SearchResponse, HttpError> {
        let url = search_url(self.config.base(), field, values);
        let headers = [
            ("Referer", self.config.referer.as_str()),
            ("Cookie", session.cookie()),
        ];

        let value = self.transport.fetch_json(&url, &headers).await?;
        SearchResponse::from_value(value).map_err(|e| HttpError::ParseError {
            message: format!("Unexpected search response from {}: {}", url, e),
        })
    }

    fn deliver<S>(record: RawRecord, sink: &mut S, summary: &mut ResolveSummary)
    where
        S: RecordSink + ?Sized,
    {
        let disposition = RecordDisposition::classify(record);
        if disposition.is_redirect() {
            summary.redirected += 1;
        }
        sink.accept(disposition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_emptiness() {
        let mut summary = ResolveSummary {
            failed_isbns: vec!["0306406152".to_string()],
            native_query_failed: true,
            ..Default::default()
        };
        assert!(summary.is_empty());

        summary.isbn_records = 1;
        assert!(!summary.is_empty());
        assert_eq!(summary.total_records(), 1);
    }
}
