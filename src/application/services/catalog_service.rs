//! Catalog Service
//!
//! Topic and category operations of the `desc` service. Reads delegate to a
//! single repository query each; writes cover the topic lifecycle.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{CategoryDto, TopicDto};
use crate::domain::{CategoryRepository, NewTopic, Topic, TopicRepository};
use crate::shared::error::AppError;

/// Number of categories in the "most popular" listing
pub const MOST_POPULAR_LIMIT: i64 = 6;

/// Topic service trait
#[async_trait]
pub trait TopicService: Send + Sync {
    /// All topics
    async fn get_all(&self) -> Result<Vec<Topic>, TopicError>;

    /// Topics of one category; empty for unknown categories
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Topic>, TopicError>;

    /// Topic projections of one category
    async fn get_topic_dtos_by_category_id(&self, category_id: i32) -> Result<Vec<TopicDto>, TopicError>;

    /// Topic count for every requested category id, zero when it has none
    async fn get_topics_count_for_categories(&self, ids: &[i32]) -> Result<BTreeMap<i32, i64>, TopicError>;

    /// Get topic by ID
    async fn get_by_id(&self, id: i32) -> Result<Topic, TopicError>;

    /// Create a topic
    async fn create(&self, topic: NewTopic) -> Result<Topic, TopicError>;

    /// Replace a topic's fields
    async fn update(&self, id: i32, topic: NewTopic) -> Result<Topic, TopicError>;

    /// Delete a topic
    async fn delete(&self, id: i32) -> Result<(), TopicError>;
}

/// Category service trait
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CategoryDto>, TopicError>;

    /// Categories with the most bookings
    async fn get_most_popular(&self) -> Result<Vec<CategoryDto>, TopicError>;
}

/// Catalog service errors
#[derive(Debug, thiserror::Error)]
pub enum TopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("{0}")]
    InvalidCategory(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for TopicError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => TopicError::InvalidCategory(msg),
            e => TopicError::Internal(e.to_string()),
        }
    }
}

impl From<TopicError> for AppError {
    fn from(err: TopicError) -> Self {
        match err {
            TopicError::NotFound => AppError::NotFound("Topic not found".into()),
            TopicError::InvalidCategory(msg) => AppError::BadRequest(msg),
            TopicError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// TopicService implementation
pub struct TopicServiceImpl<T>
where
    T: TopicRepository,
{
    topic_repo: Arc<T>,
}

impl<T> TopicServiceImpl<T>
where
    T: TopicRepository,
{
    pub fn new(topic_repo: Arc<T>) -> Self {
        Self { topic_repo }
    }
}

#[async_trait]
impl<T> TopicService for TopicServiceImpl<T>
where
    T: TopicRepository + 'static,
{
    async fn get_all(&self) -> Result<Vec<Topic>, TopicError> {
        Ok(self.topic_repo.find_all().await?)
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Topic>, TopicError> {
        Ok(self.topic_repo.find_by_category_id(category_id).await?)
    }

    async fn get_topic_dtos_by_category_id(&self, category_id: i32) -> Result<Vec<TopicDto>, TopicError> {
        let topics = self.topic_repo.find_by_category_id(category_id).await?;
        Ok(topics.into_iter().map(TopicDto::from).collect())
    }

    async fn get_topics_count_for_categories(&self, ids: &[i32]) -> Result<BTreeMap<i32, i64>, TopicError> {
        let mut unique: Vec<i32> = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let counts = self.topic_repo.count_by_category_ids(&unique).await?;

        Ok(unique
            .into_iter()
            .map(|id| (id, counts.get(&id).copied().unwrap_or(0)))
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Topic, TopicError> {
        self.topic_repo
            .find_by_id(id)
            .await?
            .ok_or(TopicError::NotFound)
    }

    async fn create(&self, topic: NewTopic) -> Result<Topic, TopicError> {
        Ok(self.topic_repo.create(&topic).await?)
    }

    async fn update(&self, id: i32, topic: NewTopic) -> Result<Topic, TopicError> {
        self.topic_repo
            .update(id, &topic)
            .await?
            .ok_or(TopicError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), TopicError> {
        if self.topic_repo.delete(id).await? {
            Ok(())
        } else {
            Err(TopicError::NotFound)
        }
    }
}

/// CategoryService implementation
pub struct CategoryServiceImpl<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> CategoryServiceImpl<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }
}

#[async_trait]
impl<C> CategoryService for CategoryServiceImpl<C>
where
    C: CategoryRepository + 'static,
{
    async fn get_all(&self) -> Result<Vec<CategoryDto>, TopicError> {
        let categories = self.category_repo.find_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    async fn get_most_popular(&self) -> Result<Vec<CategoryDto>, TopicError> {
        let categories = self.category_repo.find_most_popular(MOST_POPULAR_LIMIT).await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
