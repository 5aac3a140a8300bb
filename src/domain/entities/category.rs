//! Category entity and repository trait.
//!
//! Maps to the `categories` table of the catalog database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A catalog category grouping interview topics.
///
/// `total` counts how often interviews were booked under the category
/// and drives the "most popular" listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub total: i32,
    pub position: i32,
}

/// Repository trait for Category data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by position.
    async fn find_all(&self) -> Result<Vec<Category>, AppError>;

    /// Categories with the highest `total`, at most `limit` of them.
    async fn find_most_popular(&self, limit: i64) -> Result<Vec<Category>, AppError>;
}
