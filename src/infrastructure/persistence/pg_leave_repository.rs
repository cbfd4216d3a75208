//! PostgreSQL implementation of leave repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ApprovalStatus, Leave, LeavePatch, LeaveStatus, NewLeave};
use crate::domain::repositories::LeaveRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct LeaveRow {
    id: i64,
    employee_id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    leave_type: String,
    reason: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeaveRow> for Leave {
    type Error = AppError;

    fn try_from(r: LeaveRow) -> Result<Self, Self::Error> {
        let corrupt = |e: crate::domain::entities::UnknownVariant| {
            AppError::internal(e.to_string(), json!({ "id": r.id }))
        };
        let leave_type = r.leave_type.parse().map_err(corrupt)?;
        let status = r.status.parse().map_err(corrupt)?;

        Ok(Leave::new(
            r.id,
            r.employee_id,
            r.start_date,
            r.end_date,
            leave_type,
            r.reason,
            status,
            r.created_at,
        ))
    }
}

/// PostgreSQL repository for leave requests.
///
/// Enumerations are stored as lowercase text guarded by CHECK constraints.
pub struct PgLeaveRepository {
    pool: Arc<PgPool>,
}

impl PgLeaveRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaveRepository for PgLeaveRepository {
    async fn get_all(&self) -> Result<Vec<Leave>, AppError> {
        let rows = sqlx::query_as::<_, LeaveRow>(
            r#"
            SELECT id, employee_id, start_date, end_date, leave_type, reason, status, created_at
            FROM leaves
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Leave::try_from).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Leave, AppError> {
        let row = sqlx::query_as::<_, LeaveRow>(
            r#"
            SELECT id, employee_id, start_date, end_date, leave_type, reason, status, created_at
            FROM leaves
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn create(&self, new_leave: NewLeave) -> Result<Leave, AppError> {
        let row = sqlx::query_as::<_, LeaveRow>(
            r#"
            INSERT INTO leaves (employee_id, start_date, end_date, leave_type, reason, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, employee_id, start_date, end_date, leave_type, reason, status, created_at
            "#,
        )
        .bind(new_leave.employee_id)
        .bind(new_leave.start_date)
        .bind(new_leave.end_date)
        .bind(new_leave.leave_type.as_str())
        .bind(new_leave.reason)
        .bind(ApprovalStatus::Pending.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn update(&self, id: i64, patch: LeavePatch) -> Result<Leave, AppError> {
        let update_reason = patch.reason.is_some();
        let new_reason = patch.reason.flatten();

        let row = sqlx::query_as::<_, LeaveRow>(
            r#"
            UPDATE leaves SET
                employee_id = COALESCE($2::TEXT, employee_id),
                start_date  = COALESCE($3::DATE, start_date),
                end_date    = COALESCE($4::DATE, end_date),
                leave_type  = COALESCE($5::TEXT, leave_type),
                reason      = CASE WHEN $6 THEN $7::TEXT ELSE reason END,
                status      = COALESCE($8::TEXT, status)
            WHERE id = $1
            RETURNING id, employee_id, start_date, end_date, leave_type, reason, status, created_at
            "#,
        )
        .bind(id)
        .bind(patch.employee_id)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.leave_type.map(|t| t.as_str()))
        .bind(update_reason)
        .bind(new_reason)
        .bind(patch.status.map(|s| s.as_str()))
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM leaves WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Leave not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn update_status(&self, id: i64, status: LeaveStatus) -> Result<Leave, AppError> {
        // Names the status column only; nothing else on the row can change here.
        let row = sqlx::query_as::<_, LeaveRow>(
            r#"
            UPDATE leaves SET status = $2
            WHERE id = $1
            RETURNING id, employee_id, start_date, end_date, leave_type, reason, status, created_at
            "#,
        )
        .bind(id)
        .bind(status.status.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }
}
