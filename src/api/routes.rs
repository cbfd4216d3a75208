//! API route configuration for both services.

use crate::api::handlers::{
    check_in_handler, check_out_handler, create_attendance_handler, create_leave_handler,
    delete_attendance_handler, delete_leave_handler, get_attendance_handler, get_leave_handler,
    health_handler, list_attendances_handler, list_leaves_handler, my_attendances_handler,
    today_attendance_handler, update_attendance_handler, update_leave_handler,
    update_leave_status_handler,
};
use crate::domain::repositories::{AttendanceRepository, LeaveRepository};
use crate::state::{AttendanceState, LeaveState};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Attendance service routes.
///
/// # Endpoints
///
/// - `GET    /health`                                   - Health check
/// - `GET    /attendances`                              - List all records
/// - `POST   /attendances`                              - Create a record directly
/// - `GET    /attendances/{id}`                         - Fetch one record
/// - `PATCH  /attendances/{id}`                         - Partially update a record
/// - `DELETE /attendances/{id}`                         - Delete a record
/// - `POST   /attendances/{id}/check-out`               - Check out
/// - `POST   /employees/{employee_id}/check-in`         - Check in for today
/// - `GET    /employees/{employee_id}/attendances`      - An employee's records
/// - `GET    /employees/{employee_id}/attendances/today` - An employee's record for today
pub fn attendance_routes<R: AttendanceRepository + 'static>() -> Router<AttendanceState<R>> {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/attendances",
            get(list_attendances_handler::<R>).post(create_attendance_handler::<R>),
        )
        .route(
            "/attendances/{id}",
            get(get_attendance_handler::<R>)
                .patch(update_attendance_handler::<R>)
                .delete(delete_attendance_handler::<R>),
        )
        .route("/attendances/{id}/check-out", post(check_out_handler::<R>))
        .route(
            "/employees/{employee_id}/check-in",
            post(check_in_handler::<R>),
        )
        .route(
            "/employees/{employee_id}/attendances",
            get(my_attendances_handler::<R>),
        )
        .route(
            "/employees/{employee_id}/attendances/today",
            get(today_attendance_handler::<R>),
        )
}

/// Leave service routes.
///
/// # Endpoints
///
/// - `GET    /health`             - Health check
/// - `GET    /leaves`             - List all leave requests
/// - `POST   /leaves`             - Submit a leave request
/// - `GET    /leaves/{id}`        - Fetch one leave request
/// - `PATCH  /leaves/{id}`        - Partially update a leave request
/// - `DELETE /leaves/{id}`        - Delete a leave request
/// - `PUT    /leaves/{id}/status` - Approve or reject
pub fn leave_routes<R: LeaveRepository + 'static>() -> Router<LeaveState<R>> {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/leaves",
            get(list_leaves_handler::<R>).post(create_leave_handler::<R>),
        )
        .route(
            "/leaves/{id}",
            get(get_leave_handler::<R>)
                .patch(update_leave_handler::<R>)
                .delete(delete_leave_handler::<R>),
        )
        .route("/leaves/{id}/status", put(update_leave_status_handler::<R>))
}
