//! Employee API Module

mod handler;

use crate::state::AppState;
use axum::{Router, routing::get};

/// Employee router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1/employees", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Grouped roster lookups; two path segments, so they never
        // shadow the single-segment "/{id}" routes below.
        .route("/branches/{branch_id}", get(handler::by_branch))
        .route("/departments/{department}", get(handler::by_department))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
