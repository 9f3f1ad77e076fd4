//! HTTP client for the public arena API

use crate::api::ArenaSource;
use crate::config::ArenaConfig;
use crate::error::{ArenaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// reqwest-backed [`ArenaSource`]
#[derive(Clone)]
pub struct ArenaClient {
    client: Client,
    config: Arc<ArenaConfig>,
}

impl ArenaClient {
    /// Create a client honouring the configured timeout and User-Agent
    pub fn new(config: Arc<ArenaConfig>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ArenaError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

#[async_trait]
impl ArenaSource for ArenaClient {
    #[instrument(skip(self))]
    async fn fetch(&self, endpoint: &str) -> Result<Value> {
        let url = self.config.endpoint_url(endpoint);
        debug!(%url, "Fetching arena data");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "Arena request failed");
            if e.is_timeout() {
                ArenaError::remote(endpoint, format!("request timed out: {e}"))
            } else {
                ArenaError::remote(endpoint, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Arena API returned an error status");
            return Err(ArenaError::remote(endpoint, format!("HTTP {status}")));
        }

        response.json::<Value>().await.map_err(|e| {
            warn!(%url, error = %e, "Arena response body is not valid JSON");
            ArenaError::remote(endpoint, format!("invalid JSON body: {e}"))
        })
    }
}
