//! Leave management service.

use std::sync::Arc;

use crate::domain::entities::{Leave, LeavePatch, LeaveStatus, NewLeave};
use crate::domain::repositories::LeaveRepository;
use crate::error::AppError;
use crate::utils::validation::{validate_employee_id, validate_period};

/// Service for leave requests and their approval status.
///
/// Repository errors pass through unchanged.
pub struct LeaveService<R: LeaveRepository> {
    repository: Arc<R>,
}

impl<R: LeaveRepository> LeaveService<R> {
    /// Creates a new leave service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every leave request.
    pub async fn get_leaves(&self) -> Result<Vec<Leave>, AppError> {
        let leaves = self.repository.get_all().await?;
        tracing::debug!(count = leaves.len(), "Leaves listed");
        Ok(leaves)
    }

    /// Retrieves one leave request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the leave does not exist.
    pub async fn get_leave(&self, id: i64) -> Result<Leave, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Submits a new leave request. It starts out pending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the employee id is blank or the
    /// period ends before it starts.
    pub async fn create_leave(&self, new_leave: NewLeave) -> Result<Leave, AppError> {
        validate_employee_id(&new_leave.employee_id)?;
        validate_period(new_leave.start_date, new_leave.end_date)?;

        let created = self.repository.create(new_leave).await?;
        tracing::info!(
            id = created.id,
            employee_id = %created.employee_id,
            leave_type = %created.leave_type,
            "Leave requested"
        );
        Ok(created)
    }

    /// Partially updates a leave request.
    ///
    /// Period ordering is only checked when the patch carries both dates; a
    /// patch that moves one end is checked by the storage constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on a blank employee id or a reversed period.
    /// Returns [`AppError::NotFound`] if the leave does not exist.
    pub async fn update_leave(&self, id: i64, patch: LeavePatch) -> Result<Leave, AppError> {
        if let Some(employee_id) = &patch.employee_id {
            validate_employee_id(employee_id)?;
        }
        if let (Some(start), Some(end)) = (patch.start_date, patch.end_date) {
            validate_period(start, end)?;
        }

        self.repository.update(id, patch).await
    }

    /// Deletes a leave request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the leave does not exist.
    pub async fn delete_leave(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "Leave deleted");
        Ok(())
    }

    /// Sets the approval status of a leave request without touching any other field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the leave does not exist.
    pub async fn update_leave_status(&self, id: i64, status: LeaveStatus) -> Result<Leave, AppError> {
        let leave = self.repository.update_status(id, status).await?;
        tracing::info!(id, status = %leave.status, "Leave status updated");
        Ok(leave)
    }
}
