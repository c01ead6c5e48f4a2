//! Greetly backend binary

use anyhow::Context;

use greetly::backend::create_router;
use greetly::config::{init_tracing, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let router = create_router();

    let addr = config.backend.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Backend listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}
