//! Registry Service Library
//!
//! HTTP CRUD service over the employee registry stored in the `usr` table.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::RegistryConfig;
use crate::infra::Database;
use crate::repository::Registry;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
///
/// Fails only when the database is unreachable at startup or the listener
/// cannot be bound; request failures never reach this level.
pub async fn run_server(config: RegistryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let registry = Arc::new(Registry::new(db.get_connection()));

    let state = AppState::new(registry);
    let app = create_router(state, config.service.request_timeout());

    let addr: SocketAddr = config.service.addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} listening on {}", config.service.service_name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
