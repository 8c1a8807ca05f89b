//! Error types for im-worldcat

use thiserror::Error;

use crate::http::HttpError;

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Conditions that stop a resolution before any record is produced
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Neither ISBNs nor OCLC numbers survived sanitation
    #[error("Search query does not contain valid identifiers")]
    EmptyBatch,

    /// Every session source failed
    #[error("No session available: {} source(s) failed", .attempts.len())]
    NoSession { attempts: Vec<SourceFailure> },
}

/// A session source that could not produce a token
#[derive(Error, Debug)]
#[error("{source_name}: {error}")]
pub struct SourceFailure {
    pub source_name: String,
    #[source]
    pub error: SessionError,
}

/// Failure of one session source attempt
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("Page has no __NEXT_DATA__ payload")]
    MissingNextData,

    #[error("Invalid __NEXT_DATA__ payload: {0}")]
    InvalidNextData(String),

    #[error("__NEXT_DATA__ has no buildId")]
    MissingBuildId,

    #[error("Token document has no pageProps.secureToken")]
    MissingToken,
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
