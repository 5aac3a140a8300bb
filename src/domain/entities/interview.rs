//! Interview entity and repository trait.
//!
//! Maps to the `interview` table of the booking database:
//! - id: SERIAL PRIMARY KEY
//! - mode: INTEGER NOT NULL
//! - submitter_id: INTEGER NOT NULL
//! - title: VARCHAR(255) NOT NULL
//! - additional: TEXT NOT NULL
//! - contact_by: VARCHAR(255) NOT NULL
//! - approximate_date: VARCHAR(255) NOT NULL (free text)
//! - create_date: TIMESTAMPTZ NOT NULL
//! - topic_id: INTEGER NOT NULL
//! - status: INTEGER NOT NULL DEFAULT 1

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// A booked mock interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
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

/// A booking submission before it has an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInterview {
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

/// Repository trait for Interview data access operations.
///
/// Paged queries without an explicit sort return rows in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Find an interview by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Interview>, AppError>;

    /// All interviews with the given mode.
    async fn find_by_mode(&self, mode: i32) -> Result<Vec<Interview>, AppError>;

    /// One page over all interviews.
    async fn find_all(&self, page: PageRequest) -> Result<Page<Interview>, AppError>;

    /// One page of interviews for a topic.
    async fn find_by_topic_id(&self, topic_id: i32, page: PageRequest) -> Result<Page<Interview>, AppError>;

    /// One page of interviews whose topic is in `topic_ids`.
    async fn find_by_topic_id_in(
        &self,
        topic_ids: &[i32],
        page: PageRequest,
    ) -> Result<Page<Interview>, AppError>;

    /// One page of interviews with the given status, optionally sorted by creation date.
    async fn find_by_status(&self, status: i32, page: PageRequest) -> Result<Page<Interview>, AppError>;

    /// Set the status of one interview. Returns the number of rows changed.
    async fn update_status(&self, id: i32, status: i32) -> Result<u64, AppError>;

    /// Insert a new interview.
    async fn save(&self, interview: &NewInterview) -> Result<Interview, AppError>;
}
