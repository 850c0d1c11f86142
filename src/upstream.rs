//! Client for the remote person directory
//!
//! Some deployments keep the person list in a separate directory service
//! reachable over HTTP. When configured, the `allPersons` query reads that
//! directory instead of the local store; everything else stays local.

use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use crate::persons::Person;
use std::time::Duration;

/// HTTP client for the remote person directory
pub struct UpstreamClient {
    config: UpstreamConfig,
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Create a client from configuration.
    ///
    /// Returns `None` when no upstream URL is configured.
    pub fn from_config(config: &UpstreamConfig) -> Result<Option<Self>> {
        if config.url.is_none() {
            return Ok(None);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Some(Self {
            config: config.clone(),
            client,
        }))
    }

    /// The configured directory URL
    pub fn url(&self) -> &str {
        self.config.url.as_deref().unwrap_or_default()
    }

    /// Fetch the full person list from the remote directory
    pub async fn fetch_persons(&self) -> Result<Vec<Person>> {
        let url = self.url();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "Directory at {} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json::<Vec<Person>>()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse directory response: {}", e)))
    }
}
