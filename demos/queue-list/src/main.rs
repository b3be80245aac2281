use std::env;

use anyhow::Context;
use tracing::info;

use marathon_client::{ClientConfig, Marathon};
use marathon_observe::{LoggerConfig, logger_init};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger (MARATHON_LOG, MARATHON_LOG_FORMAT)
    logger_init(&LoggerConfig::from_env()?)?;

    // 2) Client
    let mut cfg = ClientConfig::default();
    if let Ok(endpoint) = env::var("MARATHON_URL") {
        cfg = cfg.with_endpoint(endpoint);
    }
    let marathon = Marathon::new(&cfg).context("failed to build marathon client")?;
    info!(endpoint = %cfg.endpoint, "marathon client ready");

    // 3) Queue
    let queue = marathon
        .queue()
        .await
        .with_context(|| format!("failed to list queue of {}", cfg.endpoint))?;

    if queue.is_empty() {
        println!("launch queue is empty");
    }
    for entry in &queue {
        println!("{entry}");
        for constraint in entry.app().constraints()? {
            println!("    {constraint}");
        }
    }
    Ok(())
}
