//! DTOs for attendance endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Attendance, AttendancePatch, NewAttendance};

/// Request body for `POST /attendances`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAttendanceRequest {
    #[validate(length(min = 1, max = 64))]
    pub employee_id: String,

    pub work_date: NaiveDate,

    pub check_in: DateTime<Utc>,

    pub check_out: Option<DateTime<Utc>>,
}

impl From<CreateAttendanceRequest> for NewAttendance {
    fn from(req: CreateAttendanceRequest) -> Self {
        NewAttendance {
            employee_id: req.employee_id,
            work_date: req.work_date,
            check_in: req.check_in,
            check_out: req.check_out,
        }
    }
}

/// Request body for `PATCH /attendances/{id}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `check_out` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the checkout
/// - **Timestamp** → set the checkout
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAttendanceRequest {
    #[validate(length(min = 1, max = 64))]
    pub employee_id: Option<String>,

    pub work_date: Option<NaiveDate>,

    pub check_in: Option<DateTime<Utc>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub check_out: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateAttendanceRequest> for AttendancePatch {
    fn from(req: UpdateAttendanceRequest) -> Self {
        AttendancePatch {
            employee_id: req.employee_id,
            work_date: req.work_date,
            check_in: req.check_in,
            check_out: req.check_out,
        }
    }
}

/// JSON representation of an attendance record.
#[derive(Debug, Serialize, Deserialize)]
pub struct AttendanceResponse {
    pub id: i64,
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: String,
}

impl From<Attendance> for AttendanceResponse {
    fn from(a: Attendance) -> Self {
        let status = a.status().as_str().to_string();
        AttendanceResponse {
            id: a.id,
            employee_id: a.employee_id,
            work_date: a.work_date,
            check_in: a.check_in,
            check_out: a.check_out,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_distinguishes_absent_and_null() {
        let absent: UpdateAttendanceRequest = serde_json::from_str("{}").unwrap();
        assert!(absent.check_out.is_none());

        let null: UpdateAttendanceRequest =
            serde_json::from_str(r#"{"check_out": null}"#).unwrap();
        assert_eq!(null.check_out, Some(None));

        let set: UpdateAttendanceRequest =
            serde_json::from_str(r#"{"check_out": "2026-04-01T17:00:00Z"}"#).unwrap();
        assert!(matches!(set.check_out, Some(Some(_))));
    }

    #[test]
    fn test_create_request_rejects_empty_employee_id() {
        let req: CreateAttendanceRequest = serde_json::from_str(
            r#"{"employee_id": "", "work_date": "2026-04-01", "check_in": "2026-04-01T09:00:00Z"}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_reports_status() {
        let now = Utc::now();
        let response =
            AttendanceResponse::from(Attendance::new(1, "E1".into(), now.date_naive(), now, None));

        assert_eq!(response.status, "checked_in");
    }
}
