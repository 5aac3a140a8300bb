//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::domain::NewTopic;
use crate::shared::pagination::{PageRequest, SortDirection, DEFAULT_PAGE_SIZE};

/// Create or replace a topic
#[derive(Debug, Deserialize, Validate)]
pub struct TopicRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub text: Option<String>,

    pub category_id: i32,

    #[serde(default)]
    pub position: i32,
}

impl From<TopicRequest> for NewTopic {
    fn from(request: TopicRequest) -> Self {
        NewTopic {
            name: request.name,
            text: request.text,
            category_id: request.category_id,
            position: request.position,
        }
    }
}

/// Book a mock interview
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInterviewRequest {
    #[serde(default)]
    pub mode: i32,

    pub submitter_id: i32,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    pub additional: String,

    #[validate(length(min = 1, max = 255, message = "Contact is required"))]
    pub contact_by: String,

    #[validate(length(min = 1, max = 255, message = "Approximate date is required"))]
    pub approximate_date: String,

    pub topic_id: i32,
}

/// `?page=&size=&sort=` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageQuery {
    /// Convert into a page request; an unrecognised `sort` value is ignored.
    pub fn into_request(self) -> PageRequest {
        let request = PageRequest::of(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        match self.sort.as_deref().and_then(SortDirection::parse) {
            Some(direction) => request.sorted(direction),
            None => request,
        }
    }
}

/// `?status=` query parameter of the status update endpoint
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: i32,
}
