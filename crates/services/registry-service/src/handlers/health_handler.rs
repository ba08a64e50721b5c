//! Health check handler.

use axum::{http::StatusCode, routing::get, Router};

use crate::state::AppState;

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/healthcheck", get(health_check))
}

/// Liveness probe; answers 200 with an empty body.
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_check() -> StatusCode {
    tracing::debug!("Healthcheck");
    StatusCode::OK
}
