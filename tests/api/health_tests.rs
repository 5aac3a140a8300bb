//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::*;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::mock(InMemoryInterviews::default());

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::desc(InMemoryTopics::default(), InMemoryCategories::default());

    let response = app.get("/health/live").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_without_checks_is_healthy() {
    let app = TestApp::mock(InMemoryInterviews::default());

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["checks"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_metrics_endpoint_reports_requests() {
    let app = TestApp::desc(InMemoryTopics::default(), InMemoryCategories::default());
    app.get("/categories/").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("checkdev_http_requests_total"));
}
