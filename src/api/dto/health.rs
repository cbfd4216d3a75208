//! DTOs for `GET /health`.

use serde::Serialize;

/// Overall state reported by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Healthy,
    Degraded,
}

/// State of a single dependency probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeState {
    Ok,
    /// No pool is attached, as in router tests.
    Disabled,
    Error,
}

#[derive(Debug, Serialize)]
pub struct ProbeResult {
    pub status: ProbeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProbeResult {
    pub fn ok() -> Self {
        Self {
            status: ProbeState::Ok,
            message: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            status: ProbeState::Disabled,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ProbeState::Error,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DependencyProbes {
    pub database: ProbeResult,
}

/// Body of the health endpoint. The service is degraded when any probe failed.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceHealth,
    pub service: &'static str,
    pub version: &'static str,
    pub checks: DependencyProbes,
}

impl HealthReport {
    pub fn new(service: &'static str, checks: DependencyProbes) -> Self {
        let status = if checks.database.status == ProbeState::Error {
            ServiceHealth::Degraded
        } else {
            ServiceHealth::Healthy
        };

        Self {
            status,
            service,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceHealth::Healthy
    }
}
