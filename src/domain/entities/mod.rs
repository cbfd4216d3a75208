//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence or transport
//! concerns.
//!
//! # Entity Types
//!
//! - [`Attendance`] - One employee check-in/check-out pair for a workday
//! - [`Leave`] - A leave request with an approval status
//! - [`LeaveStatus`] - Status-only value object used for approval updates
//!
//! # Design Pattern
//!
//! Entities come with separate structs for creation and partial updates:
//! - `NewAttendance`, `NewLeave` - For creating new records
//! - `AttendancePatch`, `LeavePatch` - For partial updates

pub mod attendance;
pub mod leave;

pub use attendance::{Attendance, AttendancePatch, AttendanceStatus, NewAttendance};
pub use leave::{
    ApprovalStatus, Leave, LeavePatch, LeaveStatus, LeaveType, NewLeave, UnknownVariant,
};
