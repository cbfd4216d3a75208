//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Closure-driven doubles live in [`crate::testing`]
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AttendanceRepository`] - Attendance CRUD plus check-in/check-out
//! - [`LeaveRepository`] - Leave CRUD plus status-only updates

pub mod attendance_repository;
pub mod leave_repository;

pub use attendance_repository::AttendanceRepository;
pub use leave_repository::LeaveRepository;

#[cfg(test)]
pub use attendance_repository::MockAttendanceRepository;
#[cfg(test)]
pub use leave_repository::MockLeaveRepository;
