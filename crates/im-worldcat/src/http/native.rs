//! Native HTTP client using reqwest

use super::{HttpError, HttpResponse, Transport};
use crate::config::CatalogConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::RequestFailed {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, HttpError> {
        Self::new(&config.user_agent, Duration::from_secs(config.timeout_secs))
    }

    pub async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        let url = reqwest::Url::parse(url).map_err(|_| HttpError::InvalidUrl {
            url: url.to_string(),
        })?;

        let mut request = self
            .client
            .get(url.clone())
            .header("User-Agent", &self.user_agent);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| HttpError::RequestFailed {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(HttpError::RateLimited);
        }

        let body = response.text().await.map_err(|e| HttpError::ParseError {
            message: e.to_string(),
        })?;

        let response = HttpResponse { status, body };

        if !response.is_success() {
            return Err(HttpError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch_document(&self, url: &str) -> Result<String, HttpError> {
        tracing::debug!(url, "fetching document");
        Ok(self.get(url, &[]).await?.body)
    }

    async fn fetch_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<serde_json::Value, HttpError> {
        tracing::debug!(url, "fetching JSON");
        let response = self.get(url, headers).await?;
        serde_json::from_str(&response.body).map_err(|e| HttpError::ParseError {
            message: format!("Invalid JSON from {}: {}", url, e),
        })
    }
}
