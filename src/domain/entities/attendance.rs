//! Attendance entity representing one employee workday.

use chrono::{DateTime, NaiveDate, Utc};

/// Derived state of an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    CheckedIn,
    CheckedOut,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::CheckedIn => "checked_in",
            AttendanceStatus::CheckedOut => "checked_out",
        }
    }
}

/// A single check-in/check-out pair owned by one employee.
///
/// `work_date` is the calendar day the check-in belongs to; storage keeps at
/// most one record per employee and day.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
}

impl Attendance {
    /// Creates a new Attendance instance.
    pub fn new(
        id: i64,
        employee_id: String,
        work_date: NaiveDate,
        check_in: DateTime<Utc>,
        check_out: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            employee_id,
            work_date,
            check_in,
            check_out,
        }
    }

    pub fn status(&self) -> AttendanceStatus {
        if self.check_out.is_some() {
            AttendanceStatus::CheckedOut
        } else {
            AttendanceStatus::CheckedIn
        }
    }

    pub fn is_checked_out(&self) -> bool {
        self.check_out.is_some()
    }
}

/// Input data for creating an attendance record directly.
///
/// Check-ins normally go through `check_in`; this is the generic create path.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
}

/// Partial update for an existing attendance record.
///
/// `None` fields are left unchanged.
/// `check_out: Some(None)` clears the checkout; `Some(Some(t))` sets it.
#[derive(Debug, Clone, Default)]
pub struct AttendancePatch {
    pub employee_id: Option<String>,
    pub work_date: Option<NaiveDate>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<Option<DateTime<Utc>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(check_out: Option<DateTime<Utc>>) -> Attendance {
        let now = Utc::now();
        Attendance::new(1, "E1".to_string(), now.date_naive(), now, check_out)
    }

    #[test]
    fn test_status_checked_in() {
        let attendance = sample(None);

        assert_eq!(attendance.status(), AttendanceStatus::CheckedIn);
        assert!(!attendance.is_checked_out());
    }

    #[test]
    fn test_status_checked_out() {
        let attendance = sample(Some(Utc::now()));

        assert_eq!(attendance.status(), AttendanceStatus::CheckedOut);
        assert_eq!(attendance.status().as_str(), "checked_out");
    }

    #[test]
    fn test_patch_default_is_empty() {
        let patch = AttendancePatch::default();

        assert!(patch.employee_id.is_none());
        assert!(patch.check_in.is_none());
        assert!(patch.check_out.is_none());
    }
}
