//! Session bootstrap
//!
//! Search requests need a short-lived `secureToken`. The token is read from the
//! site's search data document, whose URL contains the current site build ID.
//! The build ID is embedded in the `__NEXT_DATA__` script of the home page, so
//! bootstrap fetches a copy of the home page (live, cached, or archived), pulls
//! out the build ID and then asks the live site for the token.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::{ResolveError, SessionError, SourceFailure};
use crate::http::Transport;

lazy_static! {
    static ref NEXT_DATA: Regex = Regex::new(
        r#"(?is)<script\b[^>]*\bid\s*=\s*["']__NEXT_DATA__["'][^>]*>(.*?)</script\s*>"#
    )
    .unwrap();
}

/// Credentials for one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    cookie: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let cookie = format!("wc_tkn={}", urlencoding::encode(&token));
        Self { token, cookie }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Cookie` header value sent with every search request
    pub fn cookie(&self) -> &str {
        &self.cookie
    }
}

/// A page that carries the site's `__NEXT_DATA__` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSource {
    pub name: String,
    pub document_url: String,
}

impl SessionSource {
    pub fn new(name: impl Into<String>, document_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document_url: document_url.into(),
        }
    }

    /// The live home page
    pub fn live(base_url: &str) -> Self {
        Self::new("live", format!("{}/", base_url.trim_end_matches('/')))
    }

    /// Search engine cache of the home page
    pub fn search_cache() -> Self {
        Self::new(
            "search-cache",
            "https://webcache.googleusercontent.com/search?q=cache%3Aworldcat.org",
        )
    }

    /// Web archive copy of the home page
    pub fn web_archive() -> Self {
        Self::new(
            "web-archive",
            "https://web.archive.org/web/https://worldcat.org/",
        )
    }

    /// Live page first, then the two mirrors
    pub fn default_chain(base_url: &str) -> Vec<Self> {
        vec![
            Self::live(base_url),
            Self::search_cache(),
            Self::web_archive(),
        ]
    }

    /// Fetch this source's page, read the build ID and exchange it for a token.
    pub async fn attempt<T: Transport + ?Sized>(
        &self,
        transport: &T,
        config: &CatalogConfig,
    ) -> Result<Session, SessionError> {
        let page = transport.fetch_document(&self.document_url).await?;
        let build_id = extract_build_id(&page)?;
        tracing::debug!(source = %self.name, %build_id, "found site build");

        let data = transport
            .fetch_json(&config.token_url(&build_id), &[])
            .await?;
        let token = extract_secure_token(&data)?;

        Ok(Session::new(token))
    }
}

/// Parse the `__NEXT_DATA__` JSON embedded in a page
pub fn extract_next_data(html: &str) -> Result<Value, SessionError> {
    let payload = NEXT_DATA
        .captures(html)
        .and_then(|cap| cap.get(1))
        .ok_or(SessionError::MissingNextData)?;

    serde_json::from_str(payload.as_str().trim())
        .map_err(|e| SessionError::InvalidNextData(e.to_string()))
}

/// Site build ID from a page's `__NEXT_DATA__`
pub fn extract_build_id(html: &str) -> Result<String, SessionError> {
    extract_next_data(html)?
        .get("buildId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(SessionError::MissingBuildId)
}

fn extract_secure_token(data: &Value) -> Result<String, SessionError> {
    data.pointer("/pageProps/secureToken")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(SessionError::MissingToken)
}

/// Tries session sources in priority order
#[derive(Debug, Clone)]
pub struct SessionBootstrapper {
    config: CatalogConfig,
}

impl SessionBootstrapper {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn sources(&self) -> &[SessionSource] {
        &self.config.session_sources
    }

    /// Obtain a session from the first source that yields a token.
    ///
    /// Sources are tried one at a time and never retried. Each failure is
    /// logged; only when all of them fail is the error returned.
    pub async fn bootstrap<T: Transport + ?Sized>(
        &self,
        transport: &T,
    ) -> Result<Session, ResolveError> {
        let mut attempts = Vec::new();

        for source in self.sources() {
            match source.attempt(transport, &self.config).await {
                Ok(session) => {
                    tracing::debug!(source = %source.name, "session established");
                    return Ok(session);
                }
                Err(error) => {
                    tracing::warn!(source = %source.name, %error, "session source failed; trying next");
                    attempts.push(SourceFailure {
                        source_name: source.name.clone(),
                        error,
                    });
                }
            }
        }

        Err(ResolveError::NoSession { attempts })
    }
}
