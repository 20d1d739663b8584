//! rifa-server entry point.
//!
//! Starts the Axum HTTP server with the raffle REST endpoints.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rifa_server::api;
use rifa_server::app_state::AppState;
use rifa_server::config::{LogFormat, RaffleConfig};
use rifa_server::domain::{Blocklist, CashierRotation};
use rifa_server::persistence;
use rifa_server::service::ReservationService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = RaffleConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting rifa-server");

    // Build persistence layer; a failed bootstrap leaves the service up
    let store = persistence::open_store(&config)?;
    match store.ensure_schema().await {
        Ok(()) => tracing::info!("reservation table ready"),
        Err(error) => tracing::error!(%error, "could not create reservation table"),
    }

    // Build service layer
    let rotation = Arc::new(CashierRotation::new(config.cashiers.clone())?);
    let service = ReservationService::new(
        store,
        Blocklist::new(config.blocked_numbers.iter().copied()),
        rotation,
        config.winning_number,
    );

    // Build router
    let app = api::build_app(AppState::new(service), Some(&config.static_dir));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
