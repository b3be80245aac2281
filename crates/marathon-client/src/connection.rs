use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Transport used by the resource operations.
///
/// The shipped implementation is [`HttpConnection`]; tests and embedders can provide their own.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Issue a `GET` for `path` (relative to the Marathon endpoint) and decode the JSON body.
    async fn get(&self, path: &str) -> Result<Value, ClientError>;
}

/// `reqwest`-backed connection to a Marathon endpoint.
#[derive(Debug, Clone)]
pub struct HttpConnection {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpConnection {
    pub fn new(cfg: &ClientConfig) -> Result<Self, ClientError> {
        cfg.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .user_agent(cfg.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Connection for HttpConnection {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "marathon request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("failed to parse response: {}, body: {}", e, body))
        })
    }
}
