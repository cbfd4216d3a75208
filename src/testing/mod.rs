//! In-memory repository doubles for exercising services and handlers without
//! a database.
//!
//! Each double stores one optional closure per repository operation. Tests
//! configure only the calls a scenario needs; anything else fails with
//! `"not implemented"`.

pub mod attendance;
pub mod leave;

pub use attendance::StubAttendanceRepository;
pub use leave::StubLeaveRepository;
