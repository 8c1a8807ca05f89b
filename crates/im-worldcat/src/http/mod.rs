//! HTTP transport abstraction for catalog requests

pub mod native;

pub use native::*;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Rate limited")]
    RateLimited,
    #[error("Parse error: {message}")]
    ParseError { message: String },
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Document and JSON fetching used by session bootstrap and search queries.
///
/// Timeouts are the implementation's concern; callers never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a page as text
    async fn fetch_document(&self, url: &str) -> Result<String, HttpError>;

    /// Fetch and parse a JSON document, sending the given extra headers
    async fn fetch_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<serde_json::Value, HttpError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch_document(&self, url: &str) -> Result<String, HttpError> {
        (**self).fetch_document(url).await
    }

    async fn fetch_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<serde_json::Value, HttpError> {
        (**self).fetch_json(url, headers).await
    }
}
