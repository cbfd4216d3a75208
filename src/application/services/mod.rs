//! Business logic services for the application layer.

pub mod attendance_service;
pub mod leave_service;

pub use attendance_service::AttendanceService;
pub use leave_service::LeaveService;
