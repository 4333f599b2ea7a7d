//! Check-In Server - Main Entry Point

use std::sync::Arc;

use checkin_server::config::ServerConfig;
use checkin_server::store::RecordStore;
use checkin_server::{build_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Check-In Server v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "checkin-server.json".into());
    let config = ServerConfig::load(&config_path).unwrap_or_else(|_| {
        tracing::warn!("Config not found, using defaults");
        ServerConfig::default()
    });

    let state = AppState { store: Arc::new(RecordStore::new(&config.records_path)) };
    let app = build_router(state);

    tracing::info!(addr = %config.listen_addr, records = %config.records_path, "listening");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
