//! Stellar Merchant Tool - Main Application Entry Point
//!
//! REST backend for the merchant dashboard. It proxies the Stellar Horizon
//! API for account, payment and trustline data and forwards signing work to
//! an external signing service.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the Horizon and signing service clients
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use stellar_merchant_tool::{build_app, config, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!(horizon = %config.horizon_url, "Configuration loaded");

    let state = AppState::from_config(&config)?;
    if config.signing_service_url.is_none() {
        tracing::warn!("SIGNING_SERVICE_URL not set; payment, trustline and keypair routes are disabled");
    }
    if config.api_key_sha256.is_none() {
        tracing::warn!("API_KEY_SHA256 not set; signing routes are unauthenticated");
    }

    let app = build_app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
