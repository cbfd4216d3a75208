//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations the HTTP
//! handlers call. They are the place for business rules; repository errors are
//! passed through unchanged.
//!
//! # Available Services
//!
//! - [`services::attendance_service::AttendanceService`] - Attendance records and check-in/check-out
//! - [`services::leave_service::LeaveService`] - Leave requests and approval status

pub mod services;
