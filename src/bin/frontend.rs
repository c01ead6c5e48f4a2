//! Greetly frontend binary

use anyhow::Context;

use greetly::config::{init_tracing, AppConfig};
use greetly::frontend::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let state =
        AppState::from_config(&config.frontend).context("failed to build HTTP client")?;
    tracing::info!(backend = %state.backend_base, "Proxying /api/hello to backend");

    let router = create_router(state);

    let addr = config.frontend.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Frontend listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}
