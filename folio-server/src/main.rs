//! Folio Server - web front end for browsing the Open Library catalog

use anyhow::{Context, Result};
use folio_server::{routes, state};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "folio_server=debug,folio_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create application state
    let state = state::AppState::from_env();

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr: SocketAddr = std::env::var("FOLIO_BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .context("FOLIO_BIND_ADDR must be a socket address such as 127.0.0.1:3000")?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
