//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod attendance;
pub mod health;
pub mod leave;

pub use attendance::{
    check_in_handler, check_out_handler, create_attendance_handler, delete_attendance_handler,
    get_attendance_handler, list_attendances_handler, my_attendances_handler,
    today_attendance_handler, update_attendance_handler,
};
pub use health::health_handler;
pub use leave::{
    create_leave_handler, delete_leave_handler, get_leave_handler, list_leaves_handler,
    update_leave_handler, update_leave_status_handler,
};
