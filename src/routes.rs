//! Top-level routers for the two services.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::domain::repositories::{AttendanceRepository, LeaveRepository};
use crate::state::{AttendanceState, LeaveState};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the attendance service router with middleware.
pub fn attendance_router<R: AttendanceRepository + 'static>(
    state: AttendanceState<R>,
) -> NormalizePath<Router> {
    let router = api::routes::attendance_routes::<R>()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the leave service router with middleware.
pub fn leave_router<R: LeaveRepository + 'static>(state: LeaveState<R>) -> NormalizePath<Router> {
    let router = api::routes::leave_routes::<R>()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
