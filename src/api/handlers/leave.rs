//! Handlers for leave endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::leave::{
    CreateLeaveRequest, LeaveResponse, UpdateLeaveRequest, UpdateLeaveStatusRequest,
};
use crate::domain::repositories::LeaveRepository;
use crate::error::AppError;
use crate::state::LeaveState;

/// Lists all leave requests.
///
/// # Endpoint
///
/// `GET /leaves`
pub async fn list_leaves_handler<R: LeaveRepository + 'static>(
    State(state): State<LeaveState<R>>,
) -> Result<Json<Vec<LeaveResponse>>, AppError> {
    let leaves = state.leave_service.get_leaves().await?;
    Ok(Json(leaves.into_iter().map(Into::into).collect()))
}

/// Returns one leave request.
///
/// # Endpoint
///
/// `GET /leaves/{id}`
pub async fn get_leave_handler<R: LeaveRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<LeaveState<R>>,
) -> Result<Json<LeaveResponse>, AppError> {
    let leave = state.leave_service.get_leave(id).await?;
    Ok(Json(leave.into()))
}

/// Submits a leave request.
///
/// # Endpoint
///
/// `POST /leaves`
///
/// # Request Body
///
/// ```json
/// {
///   "employee_id": "E1",
///   "start_date": "2026-07-01",
///   "end_date": "2026-07-03",
///   "leave_type": "annual",
///   "reason": "Family trip"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the period is reversed.
pub async fn create_leave_handler<R: LeaveRepository + 'static>(
    State(state): State<LeaveState<R>>,
    Json(payload): Json<CreateLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveResponse>), AppError> {
    payload.validate()?;

    let leave = state.leave_service.create_leave(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(leave.into())))
}

/// Partially updates a leave request.
///
/// # Endpoint
///
/// `PATCH /leaves/{id}`
pub async fn update_leave_handler<R: LeaveRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<LeaveState<R>>,
    Json(payload): Json<UpdateLeaveRequest>,
) -> Result<Json<LeaveResponse>, AppError> {
    payload.validate()?;

    let leave = state.leave_service.update_leave(id, payload.into()).await?;
    Ok(Json(leave.into()))
}

/// Deletes a leave request.
///
/// # Endpoint
///
/// `DELETE /leaves/{id}`
pub async fn delete_leave_handler<R: LeaveRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<LeaveState<R>>,
) -> Result<StatusCode, AppError> {
    state.leave_service.delete_leave(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Approves or rejects a leave request.
///
/// # Endpoint
///
/// `PUT /leaves/{id}/status`
///
/// ```json
/// { "status": "approved" }
/// ```
///
/// Only the status changes; dates, type and reason are left as stored.
pub async fn update_leave_status_handler<R: LeaveRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<LeaveState<R>>,
    Json(payload): Json<UpdateLeaveStatusRequest>,
) -> Result<Json<LeaveResponse>, AppError> {
    let leave = state
        .leave_service
        .update_leave_status(id, payload.into())
        .await?;
    Ok(Json(leave.into()))
}
