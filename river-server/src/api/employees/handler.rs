//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use shared::error::{ApiResponse, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, RecordId, RosterEntry};

use crate::state::AppState;
use crate::validation;

/// List all employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let employees = state.employees.list().await?;
    Ok(Json(ApiResponse::success(employees)))
}

/// Create a new employee
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<ApiResponse<Employee>>)> {
    let payload: EmployeeCreate =
        validation::validate_into(&state.schemas.employee_create, body)?;
    let employee = state.employees.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            employee,
            "Employee created",
        )),
    ))
}

/// Get an employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let employee = state.employees.get(&RecordId::parse(&id)).await?;
    Ok(Json(ApiResponse::success(employee)))
}

/// Partially update an employee
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let payload: EmployeeUpdate =
        validation::validate_into(&state.schemas.employee_update, body)?;
    let employee = state
        .employees
        .update(&RecordId::parse(&id), payload)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        employee,
        "Employee updated",
    )))
}

/// Delete an employee
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let employee = state.employees.delete(&RecordId::parse(&id)).await?;
    Ok(Json(ApiResponse::success_with_message(
        employee,
        "Employee deleted",
    )))
}

/// Roster of a branch's employees
pub async fn by_branch(
    State(state): State<AppState>,
    Path(branch_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<RosterEntry>>>> {
    let roster = state
        .employees
        .by_branch(&RecordId::parse(&branch_id))
        .await?;
    Ok(Json(ApiResponse::success(roster)))
}

/// Roster of a department's employees (exact, case-sensitive match)
pub async fn by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<RosterEntry>>>> {
    let roster = state.employees.by_department(&department).await?;
    Ok(Json(ApiResponse::success(roster)))
}
