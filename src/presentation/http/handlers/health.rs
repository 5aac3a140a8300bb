//! Health Check Handlers
//!
//! Provides health check endpoints for Kubernetes-style liveness and readiness probes.
//!
//! # Endpoints
//! - `GET /health` - Basic health check
//! - `GET /health/live` - Liveness probe (is the server running?)
//! - `GET /health/ready` - Readiness probe (can the server accept traffic?)

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

/// A dependency probed by the readiness endpoint
#[async_trait]
pub trait DependencyCheck: Send + Sync {
    /// Key of the check in the readiness response
    fn name(&self) -> &'static str;

    /// Whether an unhealthy result makes the whole service unhealthy
    fn critical(&self) -> bool {
        true
    }

    async fn check(&self) -> ServiceHealth;
}

/// The dependency checks a service runs on `/health/ready`
#[derive(Clone, Default)]
pub struct Readiness {
    checks: Arc<Vec<Arc<dyn DependencyCheck>>>,
}

impl Readiness {
    pub fn new(checks: Vec<Arc<dyn DependencyCheck>>) -> Self {
        Self {
            checks: Arc::new(checks),
        }
    }
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Detailed health check response
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub checks: BTreeMap<&'static str, ServiceHealth>,
}

/// Health status for individual dependencies
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Simple liveness response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness probe - checks if the server is running
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// Readiness probe - checks if the server can accept traffic
/// Returns 200 if ready, 503 if a critical dependency is unavailable
pub async fn readiness(State(readiness): State<Readiness>) -> impl IntoResponse {
    let uptime = SERVER_START.elapsed().as_secs();
    let started_at = SERVER_START_TIME.to_rfc3339();

    let results = futures::future::join_all(readiness.checks.iter().map(|check| async move {
        (check.name(), check.critical(), check.check().await)
    }))
    .await;

    let overall_status = determine_overall_status(
        results
            .iter()
            .map(|(_, critical, health)| (*critical, health.status)),
    );

    let response = DetailedHealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime,
        started_at,
        checks: results
            .into_iter()
            .map(|(name, _, health)| (name, health))
            .collect(),
    };

    // Return 503 if unhealthy
    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Determine overall health from `(critical, status)` pairs
fn determine_overall_status(results: impl IntoIterator<Item = (bool, HealthStatus)>) -> HealthStatus {
    let mut overall = HealthStatus::Healthy;
    for (critical, status) in results {
        match status {
            HealthStatus::Unhealthy if critical => return HealthStatus::Unhealthy,
            HealthStatus::Healthy => {}
            _ => overall = HealthStatus::Degraded,
        }
    }
    overall
}
