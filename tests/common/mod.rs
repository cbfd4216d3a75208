#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use employee_management::api::routes::{attendance_routes, leave_routes};
use employee_management::application::services::{AttendanceService, LeaveService};
use employee_management::domain::entities::{
    ApprovalStatus, Attendance, Leave, LeaveType, NewAttendance, NewLeave,
};
use employee_management::infrastructure::persistence::{PgAttendanceRepository, PgLeaveRepository};
use employee_management::state::{AttendanceState, LeaveState};
use employee_management::testing::{StubAttendanceRepository, StubLeaveRepository};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn sample_attendance(id: i64, employee_id: &str) -> Attendance {
    Attendance::new(
        id,
        employee_id.to_string(),
        date(2026, 3, 2),
        at(2026, 3, 2, 9, 0),
        None,
    )
}

pub fn sample_leave(id: i64, employee_id: &str) -> Leave {
    Leave::new(
        id,
        employee_id.to_string(),
        date(2026, 4, 6),
        date(2026, 4, 10),
        LeaveType::Annual,
        Some("Family trip".to_string()),
        ApprovalStatus::Pending,
        at(2026, 3, 1, 12, 0),
    )
}

pub fn new_attendance(employee_id: &str, work_date: NaiveDate) -> NewAttendance {
    NewAttendance {
        employee_id: employee_id.to_string(),
        work_date,
        check_in: work_date.and_hms_opt(9, 0, 0).unwrap().and_utc(),
        check_out: None,
    }
}

pub fn new_leave(employee_id: &str) -> NewLeave {
    NewLeave {
        employee_id: employee_id.to_string(),
        start_date: date(2026, 4, 6),
        end_date: date(2026, 4, 10),
        leave_type: LeaveType::Annual,
        reason: Some("Family trip".to_string()),
    }
}

/// Attendance API backed by a stub repository, without a database.
pub fn attendance_server(repo: StubAttendanceRepository) -> TestServer {
    let service = Arc::new(AttendanceService::new(Arc::new(repo)));
    let app = attendance_routes::<StubAttendanceRepository>()
        .with_state(AttendanceState::new(service, None));

    TestServer::new(app).unwrap()
}

/// Leave API backed by a stub repository, without a database.
pub fn leave_server(repo: StubLeaveRepository) -> TestServer {
    let service = Arc::new(LeaveService::new(Arc::new(repo)));
    let app = leave_routes::<StubLeaveRepository>().with_state(LeaveState::new(service, None));

    TestServer::new(app).unwrap()
}

pub fn create_attendance_state(pool: PgPool) -> AttendanceState<PgAttendanceRepository> {
    let pool = Arc::new(pool);
    let repository = Arc::new(PgAttendanceRepository::new(pool.clone()));

    AttendanceState::new(Arc::new(AttendanceService::new(repository)), Some(pool))
}

pub fn create_leave_state(pool: PgPool) -> LeaveState<PgLeaveRepository> {
    let pool = Arc::new(pool);
    let repository = Arc::new(PgLeaveRepository::new(pool.clone()));

    LeaveState::new(Arc::new(LeaveService::new(repository)), Some(pool))
}

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

/// Pool on `DATABASE_URL` confined to a fresh schema with `migrations` applied.
///
/// Returns `None` when `DATABASE_URL` is not set, so database tests pass
/// vacuously on machines without PostgreSQL and run for real everywhere else.
/// Schemas are named `test_<pid>_<micros>_<n>` and are not dropped.
pub async fn database(migrations: &str) -> Option<PgPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };

    let schema = format!(
        "test_{}_{}_{}",
        std::process::id(),
        Utc::now().timestamp_micros(),
        NEXT_SCHEMA.fetch_add(1, Ordering::Relaxed)
    );

    let admin = PgPool::connect(&url).await.unwrap();
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&admin)
        .await
        .unwrap();
    admin.close().await;

    let search_path = format!("SET search_path TO {schema}");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                conn.execute(search_path.as_str()).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .unwrap();

    Migrator::new(Path::new(env!("CARGO_MANIFEST_DIR")).join(migrations))
        .await
        .unwrap()
        .run(&pool)
        .await
        .unwrap();

    Some(pool)
}
