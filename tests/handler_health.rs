mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use employee_management::api::routes::attendance_routes;
use employee_management::application::services::AttendanceService;
use employee_management::infrastructure::persistence::PgAttendanceRepository;
use employee_management::routes::attendance_router;
use employee_management::state::AttendanceState;
use employee_management::testing::StubAttendanceRepository;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint_with_database() {
    let Some(pool) = common::database("migrations/attendance").await else {
        return;
    };
    let app = attendance_routes::<PgAttendanceRepository>()
        .with_state(common::create_attendance_state(pool));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_database_down() {
    let Some(pool) = common::database("migrations/attendance").await else {
        return;
    };
    let state = common::create_attendance_state(pool);
    if let Some(db) = &state.db {
        db.close().await;
    }
    let app = attendance_routes::<PgAttendanceRepository>().with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_router_trims_trailing_slash() {
    let service = Arc::new(AttendanceService::new(Arc::new(
        StubAttendanceRepository::new().on_get_all(|| Ok(vec![])),
    )));
    let app = attendance_router(AttendanceState::new(service, None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/attendances/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
