//! Response DTOs
//!
//! Data structures for API response bodies. `InterviewDto` and `CategoryDto`
//! are also what the site deserializes from the booking and catalog services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Interview, Topic};

/// Topic projection used by category pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDto {
    pub id: i32,
    pub name: String,
    pub position: i32,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            name: topic.name,
            position: topic.position,
        }
    }
}

/// Category listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub total: i32,
    pub position: i32,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            total: category.total,
            position: category.position,
        }
    }
}

/// Interview as transported between the booking service and the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewDto {
    pub id: i32,
    pub mode: i32,
    pub submitter_id: i32,
    pub title: String,
    pub additional: String,
    pub contact_by: String,
    pub approximate_date: String,
    pub create_date: DateTime<Utc>,
    pub topic_id: i32,
    pub status: i32,
}

impl From<Interview> for InterviewDto {
    fn from(interview: Interview) -> Self {
        Self {
            id: interview.id,
            mode: interview.mode,
            submitter_id: interview.submitter_id,
            title: interview.title,
            additional: interview.additional,
            contact_by: interview.contact_by,
            approximate_date: interview.approximate_date,
            create_date: interview.create_date,
            topic_id: interview.topic_id,
            status: interview.status,
        }
    }
}

/// Result of a status update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    /// Rows changed; 0 when the interview does not exist
    pub updated: u64,
}
