//! DTOs for leave endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ApprovalStatus, Leave, LeavePatch, LeaveStatus, LeaveType, NewLeave};

/// Request body for `POST /leaves`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeaveRequest {
    #[validate(length(min = 1, max = 64))]
    pub employee_id: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    pub leave_type: LeaveType,

    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

impl From<CreateLeaveRequest> for NewLeave {
    fn from(req: CreateLeaveRequest) -> Self {
        NewLeave {
            employee_id: req.employee_id,
            start_date: req.start_date,
            end_date: req.end_date,
            leave_type: req.leave_type,
            reason: req.reason,
        }
    }
}

/// Request body for `PATCH /leaves/{id}`.
///
/// All fields are optional; only provided fields are changed. `reason: null`
/// clears the reason.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLeaveRequest {
    #[validate(length(min = 1, max = 64))]
    pub employee_id: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub leave_type: Option<LeaveType>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub reason: Option<Option<String>>,

    pub status: Option<ApprovalStatus>,
}

impl From<UpdateLeaveRequest> for LeavePatch {
    fn from(req: UpdateLeaveRequest) -> Self {
        LeavePatch {
            employee_id: req.employee_id,
            start_date: req.start_date,
            end_date: req.end_date,
            leave_type: req.leave_type,
            reason: req.reason,
            status: req.status,
        }
    }
}

/// Request body for `PUT /leaves/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: ApprovalStatus,
}

impl From<UpdateLeaveStatusRequest> for LeaveStatus {
    fn from(req: UpdateLeaveStatusRequest) -> Self {
        LeaveStatus::new(req.status)
    }
}

/// JSON representation of a leave request.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaveResponse {
    pub id: i64,
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Leave> for LeaveResponse {
    fn from(l: Leave) -> Self {
        let days = l.days();
        LeaveResponse {
            id: l.id,
            employee_id: l.employee_id,
            start_date: l.start_date,
            end_date: l.end_date,
            days,
            leave_type: l.leave_type,
            reason: l.reason,
            status: l.status,
            created_at: l.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_request_rejects_unknown_status() {
        let result = serde_json::from_str::<UpdateLeaveStatusRequest>(r#"{"status": "maybe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_reason_null_clears() {
        let req: UpdateLeaveRequest = serde_json::from_str(r#"{"reason": null}"#).unwrap();
        let patch = LeavePatch::from(req);

        assert_eq!(patch.reason, Some(None));
        assert!(patch.status.is_none());
    }

    #[test]
    fn test_create_request_parses_leave_type() {
        let req: CreateLeaveRequest = serde_json::from_str(
            r#"{"employee_id": "E1", "start_date": "2026-07-01", "end_date": "2026-07-02", "leave_type": "sick"}"#,
        )
        .unwrap();

        assert_eq!(req.leave_type, LeaveType::Sick);
        assert!(req.validate().is_ok());
    }
}
