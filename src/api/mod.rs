//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Raffle endpoints are mounted under `/api`, the health check at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

/// Builds the served application: API routes, front-end assets from
/// `static_dir` as the fallback when that directory exists, tracing and
/// permissive CORS.
pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = build_router();
    if let Some(dir) = static_dir.filter(|dir| dir.is_dir()) {
        tracing::info!(dir = %dir.display(), "serving static files");
        router = router.fallback_service(ServeDir::new(dir));
    }
    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
