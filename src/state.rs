//! Shared state injected into the handlers of each service.
//!
//! States are generic over the repository so routers can run against the
//! PostgreSQL adapters in production and against in-memory doubles in tests.

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AttendanceService, LeaveService};
use crate::domain::repositories::{AttendanceRepository, LeaveRepository};

/// State of the attendance service router.
pub struct AttendanceState<R: AttendanceRepository> {
    pub attendance_service: Arc<AttendanceService<R>>,
    /// Pool probed by the health endpoint. `None` disables the database check.
    pub db: Option<Arc<PgPool>>,
}

impl<R: AttendanceRepository> AttendanceState<R> {
    pub fn new(attendance_service: Arc<AttendanceService<R>>, db: Option<Arc<PgPool>>) -> Self {
        Self {
            attendance_service,
            db,
        }
    }
}

impl<R: AttendanceRepository> Clone for AttendanceState<R> {
    fn clone(&self) -> Self {
        Self {
            attendance_service: self.attendance_service.clone(),
            db: self.db.clone(),
        }
    }
}

/// State of the leave service router.
pub struct LeaveState<R: LeaveRepository> {
    pub leave_service: Arc<LeaveService<R>>,
    /// Pool probed by the health endpoint. `None` disables the database check.
    pub db: Option<Arc<PgPool>>,
}

impl<R: LeaveRepository> LeaveState<R> {
    pub fn new(leave_service: Arc<LeaveService<R>>, db: Option<Arc<PgPool>>) -> Self {
        Self { leave_service, db }
    }
}

impl<R: LeaveRepository> Clone for LeaveState<R> {
    fn clone(&self) -> Self {
        Self {
            leave_service: self.leave_service.clone(),
            db: self.db.clone(),
        }
    }
}

/// Subset of state needed by the health endpoint.
#[derive(Clone)]
pub struct HealthState {
    pub service: &'static str,
    pub db: Option<Arc<PgPool>>,
}

impl<R: AttendanceRepository> FromRef<AttendanceState<R>> for HealthState {
    fn from_ref(state: &AttendanceState<R>) -> Self {
        HealthState {
            service: "attendance",
            db: state.db.clone(),
        }
    }
}

impl<R: LeaveRepository> FromRef<LeaveState<R>> for HealthState {
    fn from_ref(state: &LeaveState<R>) -> Self {
        HealthState {
            service: "leave",
            db: state.db.clone(),
        }
    }
}
