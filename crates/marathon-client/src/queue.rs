//! Launch queue operations.
//!
//! See <https://mesosphere.github.io/marathon/docs/rest-api.html#queue>.

use marathon_model::Queue;
use serde_json::Value;
use tracing::debug;

use crate::connection::Connection;
use crate::error::ClientError;

const PATH: &str = "/v2/queue";

/// Show the content of the launch queue, in the order Marathon reports it.
///
/// Issues a single `GET /v2/queue`; no retries and no pagination.
pub async fn list(conn: &dyn Connection) -> Result<Vec<Queue>, ClientError> {
    debug!("listing launch queue");
    let json = conn.get(PATH).await?;

    let entries = json
        .get("queue")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ClientError::InvalidResponse(format!("expected {{\"queue\": [...]}}, got {json}"))
        })?;

    let queue = entries
        .iter()
        .map(Queue::from_value)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = queue.len(), "launch queue listed");
    Ok(queue)
}
