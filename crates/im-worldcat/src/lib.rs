//! # im-worldcat
//!
//! Resolves ISBNs and OCLC numbers to brief catalog records.
//!
//! ```no_run
//! use im_worldcat::{CatalogConfig, HttpClient, IdentifierBatch, IdentifierResolver};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CatalogConfig::load_default()?;
//! let client = HttpClient::from_config(&config)?;
//! let resolver = IdentifierResolver::new(client, config);
//!
//! let batch = IdentifierBatch::new(vec!["9780585030159".into()], vec![]);
//! let (records, summary) = resolver.resolve_collect(&batch).await?;
//! println!("{} record(s), {} redirected", records.len(), summary.redirected);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod record;
pub mod resolver;
pub mod sanitize;
pub mod session;

pub use config::CatalogConfig;
pub use error::{ConfigError, ResolveError, Result, SessionError, SourceFailure};
pub use http::{HttpClient, HttpError, Transport};
pub use query::{search_url, SearchField};
pub use record::{CrossReference, RawRecord, RecordDisposition, RecordSink, SearchResponse};
pub use resolver::{IdentifierResolver, ResolveSummary};
pub use sanitize::{detect, parse_items, sanitize, IdentifierBatch, ItemIdentifiers, SearchItem};
pub use session::{Session, SessionBootstrapper, SessionSource};
