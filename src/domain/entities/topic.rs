//! Topic entity and repository trait.
//!
//! Maps to the `topics` table of the catalog database:
//! - id: SERIAL PRIMARY KEY
//! - name: VARCHAR(255) NOT NULL
//! - text: TEXT NULL
//! - category_id: INTEGER NOT NULL REFERENCES categories(id)
//! - position: INTEGER NOT NULL DEFAULT 0
//! - created: TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! - updated: TIMESTAMPTZ NULL

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// An interview subject in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i32,
    pub name: String,
    pub text: Option<String>,
    pub category_id: i32,
    pub position: i32,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

/// Fields supplied when creating or replacing a topic.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTopic {
    pub name: String,
    pub text: Option<String>,
    pub category_id: i32,
    pub position: i32,
}

/// Repository trait for Topic data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// All topics ordered by position, then id.
    async fn find_all(&self) -> Result<Vec<Topic>, AppError>;

    /// Find a topic by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Topic>, AppError>;

    /// Topics of one category ordered by position, then id. Unknown categories yield nothing.
    async fn find_by_category_id(&self, category_id: i32) -> Result<Vec<Topic>, AppError>;

    /// Topic counts keyed by category id. Categories without topics are absent from the map.
    async fn count_by_category_ids(&self, category_ids: &[i32]) -> Result<HashMap<i32, i64>, AppError>;

    /// Insert a topic and return it with its generated id.
    async fn create(&self, topic: &NewTopic) -> Result<Topic, AppError>;

    /// Replace a topic's fields. Returns `None` when the id does not exist.
    async fn update(&self, id: i32, topic: &NewTopic) -> Result<Option<Topic>, AppError>;

    /// Delete a topic. Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
