//! Booking (mock) Service Client

use async_trait::async_trait;
use reqwest::Client;

use super::{fetch_required, join_url};
use crate::application::dto::InterviewDto;
use crate::application::gateways::InterviewGateway;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Client for the booking service's interview listings
#[derive(Clone)]
pub struct MockClient {
    http: Client,
    base_url: String,
}

impl MockClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl InterviewGateway for MockClient {
    async fn interviews_by_status(&self, status: i32, page: PageRequest) -> Result<Page<InterviewDto>, AppError> {
        let url = join_url(&self.base_url, &format!("/interviews/findByStatus/{status}"));
        let mut query = vec![
            ("page", page.page.to_string()),
            ("size", page.size.to_string()),
        ];
        if let Some(sort) = page.sort {
            query.push(("sort", sort.as_str().to_string()));
        }
        fetch_required("mock", self.http.get(url).query(&query)).await
    }
}
