use std::sync::Arc;

use marathon_model::Queue;

use crate::config::ClientConfig;
use crate::connection::{Connection, HttpConnection};
use crate::error::ClientError;
use crate::queue;

/// Entry point for Marathon API calls.
///
/// Holds the connection explicitly instead of relying on process-wide state.
#[derive(Clone)]
pub struct Marathon {
    connection: Arc<dyn Connection>,
}

impl Marathon {
    /// Create a client talking HTTP to `cfg.endpoint`.
    pub fn new(cfg: &ClientConfig) -> Result<Self, ClientError> {
        let connection = HttpConnection::new(cfg)?;
        Ok(Self::with_connection(Arc::new(connection)))
    }

    /// Create a client over a custom transport.
    pub fn with_connection(connection: Arc<dyn Connection>) -> Self {
        Self { connection }
    }

    /// Content of the launch queue. See [`queue::list`].
    pub async fn queue(&self) -> Result<Vec<Queue>, ClientError> {
        queue::list(self.connection.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;

    struct Fixed(Value);

    #[async_trait]
    impl Connection for Fixed {
        async fn get(&self, _path: &str) -> Result<Value, ClientError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn queue_goes_through_connection() {
        let marathon = Marathon::with_connection(Arc::new(Fixed(json!({
            "queue": [{ "app": { "id": "/web", "instances": 2 }, "delay": 0 }]
        }))));

        let queue = marathon.queue().await.unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].app().instances(), Some(2));
        assert_eq!(queue[0].to_string(), "Queue { app_id: /web, delay: 0 }");
    }

    #[test]
    fn new_validates_config() {
        let cfg = ClientConfig::default().with_endpoint("");
        assert!(matches!(
            Marathon::new(&cfg),
            Err(ClientError::InvalidEndpoint(_))
        ));
        assert!(Marathon::new(&ClientConfig::default()).is_ok());
    }
}
