//! HTTP server for the movie editors service.
//!
//! Serves `GET /movies/:year?page=<n>`. Requires `TMDB_API_KEY` in the
//! environment or a `.env` file; see `config.rs` for the optional settings.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use server::{AppState, EnrichmentOrchestrator, ServerConfig, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env().context("Invalid configuration")?;
    info!("Using TMDB at {}", config.tmdb.base_url);

    let orchestrator = EnrichmentOrchestrator::from_config(config.tmdb.clone())
        .context("Failed to create TMDB client")?;
    let app = create_router(AppState::new(orchestrator));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server is running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
