use serde::{Deserialize, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Marathon base URL (e.g. `http://marathon.mesos:8080`).
    pub endpoint: String,
    /// Timeout applied to every request (default: 30 seconds).
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            timeout_ms: 30_000,
            user_agent: concat!("marathon-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ClientError::InvalidEndpoint("endpoint is empty".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ClientError::InvalidEndpoint(format!(
                "{endpoint}: expected an http:// or https:// url"
            )));
        }
        Ok(())
    }
}
