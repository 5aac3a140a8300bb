//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure: a request helper over a
//! router, in-memory repositories for the catalog and booking services, and
//! stub upstream services for the site.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, TimeZone, Utc};
use fake::{faker::lorem::en::Sentence, Fake};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tower::ServiceExt;

use checkdev::application::services::{CategoryServiceImpl, InterviewServiceImpl, TopicServiceImpl};
use checkdev::domain::{
    Category, CategoryRepository, Interview, InterviewRepository, NewInterview, NewTopic, Topic, TopicRepository,
};
use checkdev::presentation::http::handlers::health::Readiness;
use checkdev::presentation::http::routes;
use checkdev::shared::error::AppError;
use checkdev::shared::pagination::{Page, PageRequest, SortDirection};
use checkdev::startup::{DescState, MockState};

/// Response status and raw body
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "invalid JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Test application wrapping one service's router
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Catalog service over in-memory repositories
    pub fn desc(topics: InMemoryTopics, categories: InMemoryCategories) -> Self {
        let state = DescState {
            topics: Arc::new(TopicServiceImpl::new(Arc::new(topics))),
            categories: Arc::new(CategoryServiceImpl::new(Arc::new(categories))),
            readiness: Readiness::default(),
        };
        Self::new(routes::desc_router(state))
    }

    /// Booking service over an in-memory repository
    pub fn mock(interviews: InMemoryInterviews) -> Self {
        let state = MockState {
            interviews: Arc::new(InterviewServiceImpl::new(Arc::new(interviews))),
            readiness: Readiness::default(),
        };
        Self::new(routes::mock_router(state))
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            body: body.to_vec(),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Make an authenticated GET request
    pub async fn get_auth(&self, uri: &str, token: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a request with a JSON body
    pub async fn send_json(&self, method: &str, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn put(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("PUT").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap())
            .await
    }
}

// ============================================================================
// In-memory repositories
// ============================================================================

fn page_of<T: Clone>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let content = items
        .into_iter()
        .skip(request.offset() as usize)
        .take(request.size as usize)
        .collect();
    Page::new(content, total, request)
}

#[derive(Default)]
pub struct InMemoryCategories {
    categories: Vec<Category>,
}

impl InMemoryCategories {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        let mut all = self.categories.clone();
        all.sort_by_key(|c| (c.position, c.id));
        Ok(all)
    }

    async fn find_most_popular(&self, limit: i64) -> Result<Vec<Category>, AppError> {
        let mut all = self.categories.clone();
        all.sort_by_key(|c| (std::cmp::Reverse(c.total), c.position, c.id));
        all.truncate(limit as usize);
        Ok(all)
    }
}

#[derive(Default)]
pub struct InMemoryTopics {
    topics: Mutex<Vec<Topic>>,
    category_ids: Vec<i32>,
}

impl InMemoryTopics {
    /// Topics referencing `category_ids`; creating a topic for any other id fails
    pub fn new(category_ids: Vec<i32>, topics: Vec<Topic>) -> Self {
        Self {
            topics: Mutex::new(topics),
            category_ids,
        }
    }

    fn check_category(&self, category_id: i32) -> Result<(), AppError> {
        if self.category_ids.contains(&category_id) {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "Category with id {} does not exist",
                category_id
            )))
        }
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopics {
    async fn find_all(&self) -> Result<Vec<Topic>, AppError> {
        let mut all = self.topics.lock().unwrap().clone();
        all.sort_by_key(|t| (t.position, t.id));
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Topic>, AppError> {
        Ok(self.topics.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_category_id(&self, category_id: i32) -> Result<Vec<Topic>, AppError> {
        let mut found: Vec<Topic> = self
            .topics
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.category_id == category_id)
            .cloned()
            .collect();
        found.sort_by_key(|t| (t.position, t.id));
        Ok(found)
    }

    async fn count_by_category_ids(&self, category_ids: &[i32]) -> Result<HashMap<i32, i64>, AppError> {
        let mut counts = HashMap::new();
        for topic in self.topics.lock().unwrap().iter() {
            if category_ids.contains(&topic.category_id) {
                *counts.entry(topic.category_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn create(&self, topic: &NewTopic) -> Result<Topic, AppError> {
        self.check_category(topic.category_id)?;
        let mut topics = self.topics.lock().unwrap();
        let created = Topic {
            id: topics.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            name: topic.name.clone(),
            text: topic.text.clone(),
            category_id: topic.category_id,
            position: topic.position,
            created: Utc::now(),
            updated: None,
        };
        topics.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, topic: &NewTopic) -> Result<Option<Topic>, AppError> {
        self.check_category(topic.category_id)?;
        let mut topics = self.topics.lock().unwrap();
        Ok(topics.iter_mut().find(|t| t.id == id).map(|existing| {
            existing.name = topic.name.clone();
            existing.text = topic.text.clone();
            existing.category_id = topic.category_id;
            existing.position = topic.position;
            existing.updated = Some(Utc::now());
            existing.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut topics = self.topics.lock().unwrap();
        let before = topics.len();
        topics.retain(|t| t.id != id);
        Ok(topics.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryInterviews {
    interviews: Mutex<Vec<Interview>>,
}

impl InMemoryInterviews {
    pub fn new(interviews: Vec<Interview>) -> Self {
        Self {
            interviews: Mutex::new(interviews),
        }
    }

    fn filtered(&self, predicate: impl Fn(&Interview) -> bool) -> Vec<Interview> {
        self.interviews
            .lock()
            .unwrap()
            .iter()
            .filter(|i| predicate(i))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviews {
    async fn find_by_id(&self, id: i32) -> Result<Option<Interview>, AppError> {
        Ok(self.filtered(|i| i.id == id).into_iter().next())
    }

    async fn find_by_mode(&self, mode: i32) -> Result<Vec<Interview>, AppError> {
        Ok(self.filtered(|i| i.mode == mode))
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<Interview>, AppError> {
        Ok(page_of(self.filtered(|_| true), page))
    }

    async fn find_by_topic_id(&self, topic_id: i32, page: PageRequest) -> Result<Page<Interview>, AppError> {
        Ok(page_of(self.filtered(|i| i.topic_id == topic_id), page))
    }

    async fn find_by_topic_id_in(
        &self,
        topic_ids: &[i32],
        page: PageRequest,
    ) -> Result<Page<Interview>, AppError> {
        Ok(page_of(self.filtered(|i| topic_ids.contains(&i.topic_id)), page))
    }

    async fn find_by_status(&self, status: i32, page: PageRequest) -> Result<Page<Interview>, AppError> {
        let mut found = self.filtered(|i| i.status == status);
        match page.sort {
            Some(SortDirection::Asc) => found.sort_by_key(|i| (i.create_date, i.id)),
            Some(SortDirection::Desc) => {
                found.sort_by_key(|i| std::cmp::Reverse((i.create_date, i.id)))
            }
            None => {}
        }
        Ok(page_of(found, page))
    }

    async fn update_status(&self, id: i32, status: i32) -> Result<u64, AppError> {
        let mut interviews = self.interviews.lock().unwrap();
        Ok(match interviews.iter_mut().find(|i| i.id == id) {
            Some(interview) => {
                interview.status = status;
                1
            }
            None => 0,
        })
    }

    async fn save(&self, interview: &NewInterview) -> Result<Interview, AppError> {
        let mut interviews = self.interviews.lock().unwrap();
        let saved = Interview {
            id: interviews.iter().map(|i| i.id).max().unwrap_or(0) + 1,
            mode: interview.mode,
            submitter_id: interview.submitter_id,
            title: interview.title.clone(),
            additional: interview.additional.clone(),
            contact_by: interview.contact_by.clone(),
            approximate_date: interview.approximate_date.clone(),
            create_date: interview.create_date,
            topic_id: interview.topic_id,
            status: interview.status,
        };
        interviews.push(saved.clone());
        Ok(saved)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn category(id: i32, name: &str, total: i32, position: i32) -> Category {
    Category {
        id,
        name: name.into(),
        total,
        position,
    }
}

pub fn topic(id: i32, name: &str, category_id: i32, position: i32) -> Topic {
    Topic {
        id,
        name: name.into(),
        text: None,
        category_id,
        position,
        created: Utc::now(),
        updated: None,
    }
}

/// Interview `id`; create dates increase with the id, one hour apart
pub fn interview(id: i32, topic_id: i32, status: i32) -> Interview {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    Interview {
        id,
        mode: 1 + id % 2,
        submitter_id: 100 + id % 3,
        title: Sentence(2..5).fake(),
        additional: String::new(),
        contact_by: "telegram".into(),
        approximate_date: "next week".into(),
        create_date: base + Duration::hours(i64::from(id)),
        topic_id,
        status,
    }
}

// ============================================================================
// Stub upstream services
// ============================================================================

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL that refuses connections
pub async fn dead_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
