//! Site API Tests
//!
//! The site talks to stub Auth, catalog, booking and notification services
//! served on local ports through the real HTTP clients.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use checkdev::application::dto::{IndexPage, InterviewDto, ProfileDto};
use checkdev::application::services::{IndexService, ProfilesService};
use checkdev::config::{InterviewPageSettings, RemoteServicesSettings};
use checkdev::infrastructure::clients::{self, AuthClient, DescClient, MockClient, NotificationClient};
use checkdev::presentation::http::handlers::health::Readiness;
use checkdev::presentation::http::routes;
use checkdev::shared::pagination::{Page, PageRequest};
use checkdev::startup::SiteState;

use crate::common::*;

const TOKEN: &str = "valid-token";

fn profile_json(id: i32) -> Value {
    json!({ "id": id, "username": format!("user{id}") })
}

fn auth_stub() -> Router {
    Router::new()
        .route(
            "/profiles/",
            get(|| async { Json(vec![profile_json(1), profile_json(2)]) }),
        )
        .route(
            "/profiles/ids",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                let ids: Vec<Value> = query
                    .get("ids")
                    .map(|raw| raw.split(',').filter_map(|id| id.parse().ok()).map(profile_json).collect())
                    .unwrap_or_default();
                Json(ids)
            }),
        )
        .route(
            "/profiles/{id}",
            get(|Path(id): Path<i32>| async move {
                if id == 404 {
                    Err(StatusCode::NOT_FOUND)
                } else {
                    Ok(Json(profile_json(id)))
                }
            }),
        )
        .route(
            "/person/current",
            get(|headers: HeaderMap| async move {
                let authorized = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v == format!("Bearer {TOKEN}"));
                if authorized {
                    Ok(Json(json!({
                        "id": 42,
                        "username": "admin",
                        "roles": [{ "value": "ROLE_ADMIN" }]
                    })))
                } else {
                    Err(StatusCode::UNAUTHORIZED)
                }
            }),
        )
}

fn desc_stub() -> Router {
    Router::new().route(
        "/categories/most_pop",
        get(|| async { Json(json!([{ "id": 1, "name": "Rust", "total": 9, "position": 1 }])) }),
    )
}

/// Records the query strings it receives
fn mock_stub(queries: Arc<Mutex<Vec<HashMap<String, String>>>>) -> Router {
    Router::new().route(
        "/interviews/findByStatus/{status}",
        get(move |Path(status): Path<i32>, Query(query): Query<HashMap<String, String>>| {
            let queries = queries.clone();
            async move {
                queries.lock().unwrap().push(query);
                let content: Vec<InterviewDto> = [(3, 101), (2, 100), (1, 101)]
                    .into_iter()
                    .map(|(id, submitter)| {
                        let mut dto = InterviewDto::from(interview(id, 1, status));
                        dto.submitter_id = submitter;
                        dto
                    })
                    .collect();
                Json(Page::new(content, 3, PageRequest::of(0, 5)))
            }
        }),
    )
}

fn notification_stub() -> Router {
    Router::new().route(
        "/subscribeCategory/{user_id}",
        get(|Path(_user_id): Path<i32>| async { Json(vec![1, 4]) }),
    )
}

struct Upstreams {
    auth: String,
    desc: String,
    mock: String,
    notification: String,
}

impl Upstreams {
    async fn healthy(queries: Arc<Mutex<Vec<HashMap<String, String>>>>) -> Self {
        Self {
            auth: spawn_upstream(auth_stub()).await,
            desc: spawn_upstream(desc_stub()).await,
            mock: spawn_upstream(mock_stub(queries)).await,
            notification: spawn_upstream(notification_stub()).await,
        }
    }

    fn site(self) -> TestApp {
        let settings = RemoteServicesSettings {
            auth_url: self.auth,
            desc_url: self.desc,
            mock_url: self.mock,
            notification_url: self.notification,
            request_timeout_secs: 5,
        };
        let http = clients::build_http_client(&settings).unwrap();
        let auth = Arc::new(AuthClient::new(http.clone(), settings.auth_url.as_str()));

        let state = SiteState {
            index: IndexService::new(
                Arc::new(DescClient::new(http.clone(), settings.desc_url.as_str())),
                auth.clone(),
                Arc::new(NotificationClient::new(http.clone(), settings.notification_url.as_str())),
                Arc::new(MockClient::new(http, settings.mock_url.as_str())),
                InterviewPageSettings { page: 0, size: 5 },
            ),
            profiles: ProfilesService::new(auth),
            readiness: Readiness::default(),
        };
        TestApp::new(routes::site_router(state))
    }
}

#[tokio::test]
async fn test_anonymous_index_page() {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let app = Upstreams::healthy(queries.clone()).await.site();

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    let page: IndexPage = response.json();
    assert_eq!(page.breadcrumbs[0].url, "/");
    assert_eq!(page.categories.len(), 1);
    assert_eq!(page.user_info, None);
    assert_eq!(page.subscriptions, None);
    assert!(!page.can_manage);
    assert_eq!(page.new_interviews.len(), 3);
    let user_ids: Vec<i32> = page.users.iter().map(|u| u.id).collect();
    assert_eq!(user_ids, vec![100, 101]);

    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].get("page").map(String::as_str), Some("0"));
    assert_eq!(queries[0].get("size").map(String::as_str), Some("5"));
    assert_eq!(queries[0].get("sort").map(String::as_str), Some("desc"));
}

#[tokio::test]
async fn test_authenticated_index_page() {
    let app = Upstreams::healthy(Arc::default()).await.site();

    let response = app.get_auth("/index", TOKEN).await;

    assert_eq!(response.status, StatusCode::OK);
    let page: IndexPage = response.json();
    assert_eq!(page.user_info.map(|u| u.id), Some(42));
    assert_eq!(page.subscriptions.map(|s| (s.user_id, s.categories)), Some((42, vec![1, 4])));
    assert!(page.can_manage);
}

#[tokio::test]
async fn test_rejected_token_renders_anonymous_page() {
    let app = Upstreams::healthy(Arc::default()).await.site();

    let response = app.get_auth("/", "expired").await;

    assert_eq!(response.status, StatusCode::OK);
    let page: IndexPage = response.json();
    assert_eq!(page.categories.len(), 1);
    assert_eq!(page.user_info, None);
    assert!(!page.can_manage);
    assert_eq!(page.new_interviews.len(), 3);
}

#[tokio::test]
async fn test_index_without_catalog_renders_degraded_page() {
    let mut upstreams = Upstreams::healthy(Arc::default()).await;
    upstreams.desc = dead_upstream().await;
    let app = upstreams.site();

    let response = app.get_auth("/", TOKEN).await;

    assert_eq!(response.status, StatusCode::OK);
    let page: IndexPage = response.json();
    assert!(page.categories.is_empty());
    assert_eq!(page.user_info, None);
    assert_eq!(page.new_interviews.len(), 3);
}

#[tokio::test]
async fn test_index_fails_when_booking_is_down() {
    let mut upstreams = Upstreams::healthy(Arc::default()).await;
    upstreams.mock = dead_upstream().await;
    let app = upstreams.site();

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["code"], 10008);
}

#[tokio::test]
async fn test_profile_endpoints() {
    let app = Upstreams::healthy(Arc::default()).await.site();

    let found = app.get("/profile/7").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.json::<ProfileDto>().username, "user7");

    let missing = app.get("/profile/404").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let all: Vec<ProfileDto> = app.get("/profiles/").await.json();
    assert_eq!(all.len(), 2);
}
