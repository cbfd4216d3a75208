//! Leave request entity and its status value object.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when a stored or submitted value matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            other => Err(UnknownVariant {
                kind: "approval status",
                value: other.to_string(),
            }),
        }
    }
}

/// Kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Unpaid,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(LeaveType::Annual),
            "sick" => Ok(LeaveType::Sick),
            "personal" => Ok(LeaveType::Personal),
            "unpaid" => Ok(LeaveType::Unpaid),
            other => Err(UnknownVariant {
                kind: "leave type",
                value: other.to_string(),
            }),
        }
    }
}

/// A leave request owned by one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Leave {
    pub id: i64,
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

impl Leave {
    /// Creates a new Leave instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        employee_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        leave_type: LeaveType,
        reason: Option<String>,
        status: ApprovalStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            employee_id,
            start_date,
            end_date,
            leave_type,
            reason,
            status,
            created_at,
        }
    }

    /// Number of calendar days covered by the leave, both ends inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Status-only update for a leave request.
///
/// Applying it can never touch any other column of the stored leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveStatus {
    pub status: ApprovalStatus,
}

impl LeaveStatus {
    pub fn new(status: ApprovalStatus) -> Self {
        Self { status }
    }
}

/// Input data for creating a leave request. New requests start as pending.
#[derive(Debug, Clone)]
pub struct NewLeave {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
}

/// Partial update for an existing leave request.
///
/// `None` fields are left unchanged.
/// `reason: Some(None)` clears the reason; `Some(Some(r))` sets it.
#[derive(Debug, Clone, Default)]
pub struct LeavePatch {
    pub employee_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub leave_type: Option<LeaveType>,
    pub reason: Option<Option<String>>,
    pub status: Option<ApprovalStatus>,
}
