//! Handlers for attendance endpoints.
//!
//! Handlers are generic over the repository behind the service so the same
//! router runs against PostgreSQL or a test double.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::attendance::{
    AttendanceResponse, CreateAttendanceRequest, UpdateAttendanceRequest,
};
use crate::domain::repositories::AttendanceRepository;
use crate::error::AppError;
use crate::state::AttendanceState;

/// Lists all attendance records.
///
/// # Endpoint
///
/// `GET /attendances`
pub async fn list_attendances_handler<R: AttendanceRepository + 'static>(
    State(state): State<AttendanceState<R>>,
) -> Result<Json<Vec<AttendanceResponse>>, AppError> {
    let records = state.attendance_service.get_attendances().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Returns one attendance record.
///
/// # Endpoint
///
/// `GET /attendances/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the record doesn't exist.
pub async fn get_attendance_handler<R: AttendanceRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<AttendanceState<R>>,
) -> Result<Json<AttendanceResponse>, AppError> {
    let record = state.attendance_service.get_attendance(id).await?;
    Ok(Json(record.into()))
}

/// Creates an attendance record directly.
///
/// # Endpoint
///
/// `POST /attendances`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the employee already has a record for that day.
pub async fn create_attendance_handler<R: AttendanceRepository + 'static>(
    State(state): State<AttendanceState<R>>,
    Json(payload): Json<CreateAttendanceRequest>,
) -> Result<(StatusCode, Json<AttendanceResponse>), AppError> {
    payload.validate()?;

    let record = state
        .attendance_service
        .create_attendance(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Partially updates an attendance record.
///
/// # Endpoint
///
/// `PATCH /attendances/{id}`
///
/// # Request Body
///
/// All fields are optional. `"check_out": null` clears the checkout.
///
/// ```json
/// {
///   "check_in": "2026-04-01T09:00:00Z",
///   "check_out": null
/// }
/// ```
pub async fn update_attendance_handler<R: AttendanceRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<AttendanceState<R>>,
    Json(payload): Json<UpdateAttendanceRequest>,
) -> Result<Json<AttendanceResponse>, AppError> {
    payload.validate()?;

    let record = state
        .attendance_service
        .update_attendance(id, payload.into())
        .await?;

    Ok(Json(record.into()))
}

/// Deletes an attendance record.
///
/// # Endpoint
///
/// `DELETE /attendances/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the record doesn't exist or was already deleted.
pub async fn delete_attendance_handler<R: AttendanceRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<AttendanceState<R>>,
) -> Result<StatusCode, AppError> {
    state.attendance_service.delete_attendance(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Checks an employee in for today.
///
/// # Endpoint
///
/// `POST /employees/{employee_id}/check-in`
///
/// # Errors
///
/// Returns 409 Conflict if the employee already checked in today.
pub async fn check_in_handler<R: AttendanceRepository + 'static>(
    Path(employee_id): Path<String>,
    State(state): State<AttendanceState<R>>,
) -> Result<(StatusCode, Json<AttendanceResponse>), AppError> {
    let record = state.attendance_service.check_in(&employee_id).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Checks out an attendance record.
///
/// # Endpoint
///
/// `POST /attendances/{id}/check-out`
///
/// # Errors
///
/// Returns 404 Not Found if the record doesn't exist.
/// Returns 409 Conflict if it is already checked out.
pub async fn check_out_handler<R: AttendanceRepository + 'static>(
    Path(id): Path<i64>,
    State(state): State<AttendanceState<R>>,
) -> Result<Json<AttendanceResponse>, AppError> {
    let record = state.attendance_service.check_out(id).await?;
    Ok(Json(record.into()))
}

/// Lists the records of one employee, newest first.
///
/// # Endpoint
///
/// `GET /employees/{employee_id}/attendances`
pub async fn my_attendances_handler<R: AttendanceRepository + 'static>(
    Path(employee_id): Path<String>,
    State(state): State<AttendanceState<R>>,
) -> Result<Json<Vec<AttendanceResponse>>, AppError> {
    let records = state
        .attendance_service
        .get_my_attendances(&employee_id)
        .await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Returns the employee's record for today.
///
/// # Endpoint
///
/// `GET /employees/{employee_id}/attendances/today`
///
/// # Errors
///
/// Returns 404 Not Found if the employee hasn't checked in today.
pub async fn today_attendance_handler<R: AttendanceRepository + 'static>(
    Path(employee_id): Path<String>,
    State(state): State<AttendanceState<R>>,
) -> Result<Json<AttendanceResponse>, AppError> {
    let record = state.attendance_service.check_today(&employee_id).await?;
    Ok(Json(record.into()))
}
