//! Configuration for catalog access
//!
//! Loaded from `config.toml` in the user's config directory
//! (`~/.config/im-worldcat/config.toml` on Linux). Every key is optional:
//!
//! ```toml
//! base_url = "https://www.worldcat.org"
//! referer = "https://worldcat.org/search?q="
//! user_agent = "im-worldcat/0.1"
//! timeout_secs = 60
//!
//! [[session_sources]]
//! name = "live"
//! document_url = "https://www.worldcat.org/"
//!
//! [[session_sources]]
//! name = "web-archive"
//! document_url = "https://web.archive.org/web/https://worldcat.org/"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::session::SessionSource;

pub const DEFAULT_BASE_URL: &str = "https://www.worldcat.org";
pub const DEFAULT_REFERER: &str = "https://worldcat.org/search?q=";

/// Catalog endpoints, request headers and session source chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Service root used for token and search requests
    pub base_url: String,
    /// `Referer` sent with every search request
    pub referer: String,
    pub user_agent: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout_secs: u64,
    /// Sources tried in order when bootstrapping a session
    pub session_sources: Vec<SessionSource>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            user_agent: format!("im-worldcat/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 60,
            session_sources: SessionSource::default_chain(DEFAULT_BASE_URL),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading catalog config");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/im-worldcat/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("im-worldcat").join("config.toml"))
    }

    /// Service root without a trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Token document URL for a site build
    pub fn token_url(&self, build_id: &str) -> String {
        format!(
            "{}/_next/data/{}/en/search.json",
            self.base(),
            urlencoding::encode(build_id)
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("base_url {}: {}", self.base_url, e)))?;
        for source in &self.session_sources {
            url::Url::parse(&source.document_url).map_err(|e| {
                ConfigError::InvalidUrl(format!(
                    "session source {} ({}): {}",
                    source.name, source.document_url, e
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let config = CatalogConfig::default();
        let names: Vec<&str> = config
            .session_sources
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["live", "search-cache", "web-archive"]);
        assert_eq!(config.session_sources[0].document_url, "https://www.worldcat.org/");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CatalogConfig::from_toml_str("timeout_secs = 5\n").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.session_sources.len(), 3);
    }

    #[test]
    fn test_custom_sources_replace_chain() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [[session_sources]]
            name = "mirror"
            document_url = "https://mirror.example.org/"
            "#,
        )
        .unwrap();
        assert_eq!(config.session_sources.len(), 1);
        assert_eq!(config.session_sources[0].name, "mirror");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            CatalogConfig::from_toml_str("base_url = \"not a url\""),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            CatalogConfig::from_toml_str("timeout_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_token_url() {
        let config = CatalogConfig {
            base_url: "https://www.worldcat.org/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.token_url("abc123"),
            "https://www.worldcat.org/_next/data/abc123/en/search.json"
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "referer = \"https://example.org/\"\n").unwrap();

        let config = CatalogConfig::load(&path).unwrap();
        assert_eq!(config.referer, "https://example.org/");

        let missing = CatalogConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
