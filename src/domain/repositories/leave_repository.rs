//! Repository trait for leave request data access.

use crate::domain::entities::{Leave, LeavePatch, LeaveStatus, NewLeave};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for leave requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLeaveRepository`] - PostgreSQL implementation
/// - [`crate::testing::StubLeaveRepository`] - Injectable test double
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_leave.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// Returns every leave request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_all(&self) -> Result<Vec<Leave>, AppError>;

    /// Finds a leave request by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no leave has this id.
    async fn get_by_id(&self, id: i64) -> Result<Leave, AppError>;

    /// Inserts a new pending leave request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a storage constraint rejects the row.
    async fn create(&self, new_leave: NewLeave) -> Result<Leave, AppError>;

    /// Partially updates a leave request. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no leave has this id.
    async fn update(&self, id: i64, patch: LeavePatch) -> Result<Leave, AppError>;

    /// Deletes a leave request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no leave has this id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Updates only the status column and returns the full stored leave.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no leave has this id.
    async fn update_status(&self, id: i64, status: LeaveStatus) -> Result<Leave, AppError>;
}
