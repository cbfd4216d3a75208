//! PostgreSQL implementation of attendance repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Attendance, AttendancePatch, NewAttendance};
use crate::domain::repositories::AttendanceRepository;
use crate::error::AppError;
use crate::utils::workday::WorkdayCalendar;

#[derive(Debug, sqlx::FromRow)]
struct AttendanceRow {
    id: i64,
    employee_id: String,
    work_date: NaiveDate,
    check_in: DateTime<Utc>,
    check_out: Option<DateTime<Utc>>,
}

impl From<AttendanceRow> for Attendance {
    fn from(r: AttendanceRow) -> Self {
        Attendance::new(r.id, r.employee_id, r.work_date, r.check_in, r.check_out)
    }
}

/// PostgreSQL repository for attendance records.
///
/// Each operation is a single statement, except `check_out`, which follows a
/// failed conditional update with a lookup to tell a missing record from one
/// already checked out. The one-record-per-day rule is enforced by the
/// `(employee_id, work_date)` unique constraint.
pub struct PgAttendanceRepository {
    pool: Arc<PgPool>,
    calendar: WorkdayCalendar,
}

impl PgAttendanceRepository {
    /// Creates a new repository computing workdays in UTC.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_calendar(pool, WorkdayCalendar::utc())
    }

    /// Creates a new repository computing workdays with the given calendar.
    pub fn with_calendar(pool: Arc<PgPool>, calendar: WorkdayCalendar) -> Self {
        Self { pool, calendar }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    async fn get_all(&self) -> Result<Vec<Attendance>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceRow>(
            r#"
            SELECT id, employee_id, work_date, check_in, check_out
            FROM attendances
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Attendance::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Attendance, AppError> {
        let row = sqlx::query_as::<_, AttendanceRow>(
            r#"
            SELECT id, employee_id, work_date, check_in, check_out
            FROM attendances
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn create(&self, new_attendance: NewAttendance) -> Result<Attendance, AppError> {
        let row = sqlx::query_as::<_, AttendanceRow>(
            r#"
            INSERT INTO attendances (employee_id, work_date, check_in, check_out)
            VALUES ($1, $2, $3, $4)
            RETURNING id, employee_id, work_date, check_in, check_out
            "#,
        )
        .bind(new_attendance.employee_id)
        .bind(new_attendance.work_date)
        .bind(new_attendance.check_in)
        .bind(new_attendance.check_out)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: AttendancePatch) -> Result<Attendance, AppError> {
        let update_check_out = patch.check_out.is_some();
        let new_check_out = patch.check_out.flatten();

        let row = sqlx::query_as::<_, AttendanceRow>(
            r#"
            UPDATE attendances SET
                employee_id = COALESCE($2::TEXT, employee_id),
                work_date   = COALESCE($3::DATE, work_date),
                check_in    = COALESCE($4::TIMESTAMPTZ, check_in),
                check_out   = CASE WHEN $5 THEN $6::TIMESTAMPTZ ELSE check_out END
            WHERE id = $1
            RETURNING id, employee_id, work_date, check_in, check_out
            "#,
        )
        .bind(id)
        .bind(patch.employee_id)
        .bind(patch.work_date)
        .bind(patch.check_in)
        .bind(update_check_out)
        .bind(new_check_out)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM attendances WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Attendance not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn check_in(&self, employee_id: &str) -> Result<Attendance, AppError> {
        let now = Utc::now();
        let work_date = self.calendar.workday_of(now);

        let row = sqlx::query_as::<_, AttendanceRow>(
            r#"
            INSERT INTO attendances (employee_id, work_date, check_in)
            VALUES ($1, $2, $3)
            ON CONFLICT (employee_id, work_date) DO NOTHING
            RETURNING id, employee_id, work_date, check_in, check_out
            "#,
        )
        .bind(employee_id)
        .bind(work_date)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Attendance::from).ok_or_else(|| {
            AppError::conflict(
                "Already checked in today",
                json!({ "employee_id": employee_id, "work_date": work_date }),
            )
        })
    }

    async fn check_out(&self, id: i64) -> Result<Attendance, AppError> {
        let row = sqlx::query_as::<_, AttendanceRow>(
            r#"
            UPDATE attendances SET check_out = $2
            WHERE id = $1 AND check_out IS NULL
            RETURNING id, employee_id, work_date, check_in, check_out
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = row {
            return Ok(row.into());
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM attendances WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        if exists {
            Err(AppError::conflict("Already checked out", json!({ "id": id })))
        } else {
            Err(AppError::not_found(
                "Attendance not found",
                json!({ "id": id }),
            ))
        }
    }

    async fn get_all_me(&self, employee_id: &str) -> Result<Vec<Attendance>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceRow>(
            r#"
            SELECT id, employee_id, work_date, check_in, check_out
            FROM attendances
            WHERE employee_id = $1
            ORDER BY work_date DESC, id DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Attendance::from).collect())
    }

    async fn check_today(&self, employee_id: &str) -> Result<Attendance, AppError> {
        let row = sqlx::query_as::<_, AttendanceRow>(
            r#"
            SELECT id, employee_id, work_date, check_in, check_out
            FROM attendances
            WHERE employee_id = $1 AND work_date = $2
            "#,
        )
        .bind(employee_id)
        .bind(self.calendar.today())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
