//! Shared helpers for im-worldcat integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use im_worldcat::{CatalogConfig, HttpError, Transport};
use serde_json::{json, Value};

pub const BUILD_ID: &str = "build-7f3a";
pub const TOKEN: &str = "tok+en/1=";

/// One request seen by the scripted transport
#[derive(Debug, Clone)]
pub struct Request {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_search(&self) -> bool {
        self.url.contains("/api/search?")
    }
}

enum Reply {
    Document(String),
    Json(Value),
    Fail(u16),
    /// Never answers
    Pending,
}

/// In-memory transport answering from a fixed script.
///
/// Unscripted URLs answer with HTTP 404.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, Reply>>,
    log: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn document(&self, url: &str, body: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(url.to_string(), Reply::Document(body.into()));
    }

    pub fn json(&self, url: &str, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(url.to_string(), Reply::Json(body));
    }

    pub fn fail(&self, url: &str, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .insert(url.to_string(), Reply::Fail(status));
    }

    /// Leave `url` hanging forever, as a stalled connection would
    pub fn pending(&self, url: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(url.to_string(), Reply::Pending);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.log.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<Request> {
        self.requests().into_iter().filter(Request::is_search).collect()
    }

    fn answer(&self, url: &str, headers: &[(&str, &str)]) -> Result<Reply, HttpError> {
        self.log.lock().unwrap().push(Request {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        });

        let replies = self.replies.lock().unwrap();
        match replies.get(url) {
            Some(Reply::Document(body)) => Ok(Reply::Document(body.clone())),
            Some(Reply::Json(body)) => Ok(Reply::Json(body.clone())),
            Some(Reply::Pending) => Ok(Reply::Pending),
            Some(Reply::Fail(status)) => Err(HttpError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(HttpError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch_document(&self, url: &str) -> Result<String, HttpError> {
        match self.answer(url, &[])? {
            Reply::Document(body) => Ok(body),
            Reply::Json(body) => Ok(body.to_string()),
            Reply::Pending => std::future::pending().await,
            Reply::Fail(_) => unreachable!(),
        }
    }

    async fn fetch_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value, HttpError> {
        match self.answer(url, headers)? {
            Reply::Json(body) => Ok(body),
            Reply::Document(body) => serde_json::from_str(&body).map_err(|e| HttpError::ParseError {
                message: e.to_string(),
            }),
            Reply::Pending => std::future::pending().await,
            Reply::Fail(_) => unreachable!(),
        }
    }
}

/// Home page carrying a `__NEXT_DATA__` payload
pub fn next_data_page(build_id: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><div id="__next"></div>
<script id="__NEXT_DATA__" type="application/json">{}</script></body></html>"#,
        json!({"props": {"pageProps": {}}, "page": "/", "buildId": build_id})
    )
}

pub fn token_json(token: &str) -> Value {
    json!({"pageProps": {"secureToken": token}, "__N_SSP": true})
}

pub fn brief_records(records: Vec<Value>) -> Value {
    json!({"numberOfRecords": records.len(), "briefRecords": records})
}

pub fn token_url(config: &CatalogConfig) -> String {
    config.token_url(BUILD_ID)
}

/// Script a working live home page and token document
pub fn script_live_session(transport: &ScriptedTransport, config: &CatalogConfig) {
    transport.document(&config.session_sources[0].document_url, next_data_page(BUILD_ID));
    transport.json(&token_url(config), token_json(TOKEN));
}

pub fn isbn_search_url(config: &CatalogConfig, hyphenated: &str) -> String {
    format!("{}/api/search?q=bn%3A{}", config.base(), hyphenated)
}
