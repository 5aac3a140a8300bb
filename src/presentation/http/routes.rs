//! Route Configuration
//!
//! One router per service; each also serves the health and metrics endpoints.

use axum::{
    extract::FromRef,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};

use super::handlers;
use super::handlers::health::Readiness;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::{DescState, MockState, SiteState};

/// Catalog router: topics and categories
pub fn desc_router(state: DescState) -> Router {
    Router::new()
        .route("/topics/", get(handlers::topic::list_topics))
        .route("/topics/count", get(handlers::topic::topics_count))
        .route(
            "/topics/getByCategoryId/{category_id}",
            get(handlers::topic::topic_dtos_by_category),
        )
        .route("/topics/{category_id}", get(handlers::topic::topics_by_category))
        .route("/topic/", post(handlers::topic::create_topic))
        .route(
            "/topic/{id}",
            get(handlers::topic::get_topic)
                .put(handlers::topic::update_topic)
                .delete(handlers::topic::delete_topic),
        )
        .route("/categories/", get(handlers::category::list_categories))
        .route("/categories/most_pop", get(handlers::category::most_popular))
        .merge(operational_routes())
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Booking router: interviews
pub fn mock_router(state: MockState) -> Router {
    Router::new()
        .route("/interview/", post(handlers::interview::create_interview))
        .route("/interview/{id}", get(handlers::interview::get_interview))
        .route("/interview/status/{id}", put(handlers::interview::update_status))
        .route("/interviews/", get(handlers::interview::list_interviews))
        .route("/interviews/findByMode/{mode}", get(handlers::interview::find_by_mode))
        .route(
            "/interviews/findByTopicId/{topic_id}",
            get(handlers::interview::find_by_topic_id),
        )
        .route(
            "/interviews/findByTopicsIds/{ids}",
            get(handlers::interview::find_by_topic_ids),
        )
        .route(
            "/interviews/findByStatus/{status}",
            get(handlers::interview::find_by_status),
        )
        .merge(operational_routes())
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Site router: home page and profiles
pub fn site_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/index", get(handlers::index::index))
        .route("/profile/{id}", get(handlers::profile::get_profile))
        .route("/profiles/", get(handlers::profile::list_profiles))
        .merge(operational_routes())
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Health probes and the Prometheus endpoint
fn operational_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Readiness: FromRef<S>,
{
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .route("/metrics", get(metrics_handler))
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}
