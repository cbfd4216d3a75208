//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DependencyProbes, HealthReport, ProbeResult};
use crate::state::HealthState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "attendance",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<HealthState>) -> (StatusCode, Json<HealthReport>) {
    let report = HealthReport::new(
        state.service,
        DependencyProbes {
            database: probe_database(&state).await,
        },
    );

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}

async fn probe_database(state: &HealthState) -> ProbeResult {
    let Some(pool) = &state.db else {
        return ProbeResult::disabled();
    };

    match sqlx::query("SELECT 1").execute(pool.as_ref()).await {
        Ok(_) => ProbeResult::ok(),
        Err(e) => {
            tracing::warn!(service = state.service, error = %e, "Database health probe failed");
            ProbeResult::error(format!("Database error: {}", e))
        }
    }
}
