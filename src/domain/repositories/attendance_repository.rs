//! Repository trait for attendance data access.

use crate::domain::entities::{Attendance, AttendancePatch, NewAttendance};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for attendance records.
///
/// Besides plain CRUD it covers the workday operations: checking in, checking
/// out and looking up an employee's records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAttendanceRepository`] - PostgreSQL implementation
/// - [`crate::testing::StubAttendanceRepository`] - Injectable test double
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_attendance.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Returns every attendance record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_all(&self) -> Result<Vec<Attendance>, AppError>;

    /// Finds an attendance record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    async fn get_by_id(&self, id: i64) -> Result<Attendance, AppError>;

    /// Inserts a new record and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the employee already has a record for that day.
    async fn create(&self, new_attendance: NewAttendance) -> Result<Attendance, AppError>;

    /// Partially updates a record. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    async fn update(&self, id: i64, patch: AttendancePatch) -> Result<Attendance, AppError>;

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id, including when
    /// it was already deleted.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Creates today's record for an employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the employee already checked in today.
    async fn check_in(&self, employee_id: &str) -> Result<Attendance, AppError>;

    /// Sets the checkout time of a record to now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Conflict`] if the record is already checked out.
    async fn check_out(&self, id: i64) -> Result<Attendance, AppError>;

    /// Returns all records of one employee, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_all_me(&self, employee_id: &str) -> Result<Vec<Attendance>, AppError>;

    /// Returns the employee's record for today.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the employee has not checked in today.
    async fn check_today(&self, employee_id: &str) -> Result<Attendance, AppError>;
}
