//! System endpoints: health check.

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// `GET /health` — Liveness check.
///
/// Answers without touching storage.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain"),
    )
)]
pub async fn health_handler() -> &'static str {
    "OK"
}

/// System routes mounted at the root level (not under /api).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
