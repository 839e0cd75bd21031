//! HTTP client for the upstream game-data APIs.
//!
//! Every request is a single GET carrying the configured `User-Agent`.
//! There is no timeout and no retry: one network attempt per call.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{UpstreamError, UpstreamResult};
use crate::core::config::UpstreamConfig;
use crate::core::error::{Error, Result};

/// Shared client for the price, catalogue, hiscore and wiki APIs.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    log_payloads: bool,
}

impl UpstreamClient {
    /// Build a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            log_payloads: config.log_payloads,
        })
    }

    /// GET `url` and parse the body as JSON.
    pub async fn fetch_json(&self, url: &str) -> UpstreamResult<Value> {
        let body = self.get(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Upstream returned malformed JSON for {}: {}", url, e);
            UpstreamError::malformed(url, e)
        })
    }

    /// GET `url` and return the raw body.
    pub async fn fetch_text(&self, url: &str) -> UpstreamResult<String> {
        self.get(url).await
    }

    async fn get(&self, url: &str) -> UpstreamResult<String> {
        debug!("Upstream request: GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(url, e))?;

        let status = response.status();
        debug!("Upstream response: {} for {}", status, url);

        if !status.is_success() {
            return Err(UpstreamError::status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::transport(url, e))?;

        if self.log_payloads {
            debug!("Upstream payload from {}: {}", url, body);
        }

        Ok(body)
    }
}
