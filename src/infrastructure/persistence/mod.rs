//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries mapped through `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgAttendanceRepository`] - Attendance storage and the check-in/check-out flow
//! - [`PgLeaveRepository`] - Leave storage and status updates

pub mod pg_attendance_repository;
pub mod pg_leave_repository;

pub use pg_attendance_repository::PgAttendanceRepository;
pub use pg_leave_repository::PgLeaveRepository;
