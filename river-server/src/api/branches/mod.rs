//! Branch API Module

mod handler;

use crate::state::AppState;
use axum::{Router, routing::get};

/// Branch router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1/branches", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
