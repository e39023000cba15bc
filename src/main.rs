use std::{env, sync::Arc};

use anyhow::Result;
use faleproxy::{api, ProxyService, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    tracing::info!(
        "Rewriting '{}' -> '{}' in fetched pages",
        config.target_term,
        config.replacement_term
    );

    let service = Arc::new(ProxyService::new(&config));

    api::start_server(&config, service)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
