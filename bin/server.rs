// Pet Adoption - Web Server

use anyhow::{Context, Result};
use pet_adoption::{server, Config};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    config.init_tracing("info,tower_http=debug");

    let catalog = config
        .load_catalog()
        .context("failed to load pet catalog")?;
    tracing::info!(pets = catalog.len(), "catalog ready");

    let app = server::app(Arc::new(catalog));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "server running");
    tracing::info!("   UI:  http://{}/", config.bind_addr);
    tracing::info!("   API: http://{}/api/pets", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
