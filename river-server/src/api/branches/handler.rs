//! Branch API Handlers
//!
//! Handlers validate the body, invoke the service, and wrap the result
//! in the response envelope. Failures become `AppError` and are
//! translated to status + envelope by its `IntoResponse` impl.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use shared::error::{ApiResponse, AppResult};
use shared::models::{Branch, BranchCreate, BranchUpdate, RecordId};

use crate::state::AppState;
use crate::validation;

/// List all branches
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Branch>>>> {
    let branches = state.branches.list().await?;
    Ok(Json(ApiResponse::success(branches)))
}

/// Create a new branch
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<ApiResponse<Branch>>)> {
    let payload: BranchCreate = validation::validate_into(&state.schemas.branch_create, body)?;
    let branch = state.branches.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(branch, "Branch created")),
    ))
}

/// Get a branch by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    let branch = state.branches.get(&RecordId::parse(&id)).await?;
    Ok(Json(ApiResponse::success(branch)))
}

/// Partially update a branch
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    let payload: BranchUpdate = validation::validate_into(&state.schemas.branch_update, body)?;
    let branch = state.branches.update(&RecordId::parse(&id), payload).await?;
    Ok(Json(ApiResponse::success_with_message(
        branch,
        "Branch updated",
    )))
}

/// Delete a branch
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    let branch = state.branches.delete(&RecordId::parse(&id)).await?;
    Ok(Json(ApiResponse::success_with_message(
        branch,
        "Branch deleted",
    )))
}
