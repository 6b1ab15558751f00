//! API routes
//!
//! Per-entity route modules in the `router()` + `handler` convention,
//! nested under `/api/v1`, with CORS and request tracing layered on the
//! combined router.

pub mod branches;
pub mod employees;
pub mod health;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the fully configured application
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(branches::router())
        .merge(employees::router())
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
