//! Topic Repository Implementation
//!
//! PostgreSQL implementation of the TopicRepository trait over the `topics` table.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewTopic, Topic, TopicRepository};
use crate::shared::error::AppError;

/// Database row representation of the topics table.
#[derive(Debug, sqlx::FromRow)]
struct TopicRow {
    id: i32,
    name: String,
    text: Option<String>,
    category_id: i32,
    position: i32,
    created: DateTime<Utc>,
    updated: Option<DateTime<Utc>>,
}

impl TopicRow {
    fn into_topic(self) -> Topic {
        Topic {
            id: self.id,
            name: self.name,
            text: self.text,
            category_id: self.category_id,
            position: self.position,
            created: self.created,
            updated: self.updated,
        }
    }
}

/// Maps foreign key violations on `category_id` to a client error.
fn map_write_error(e: sqlx::Error, category_id: i32) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::BadRequest(format!("Category with id {} does not exist", category_id))
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL topic repository implementation.
#[derive(Clone)]
pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    /// Create a new PgTopicRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    async fn find_all(&self) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query_as::<_, TopicRow>(
            r#"
            SELECT id, name, text, category_id, position, created, updated
            FROM topics
            ORDER BY position, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_topic()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Topic>, AppError> {
        let row = sqlx::query_as::<_, TopicRow>(
            r#"
            SELECT id, name, text, category_id, position, created, updated
            FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_topic()))
    }

    async fn find_by_category_id(&self, category_id: i32) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query_as::<_, TopicRow>(
            r#"
            SELECT id, name, text, category_id, position, created, updated
            FROM topics
            WHERE category_id = $1
            ORDER BY position, id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_topic()).collect())
    }

    async fn count_by_category_ids(&self, category_ids: &[i32]) -> Result<HashMap<i32, i64>, AppError> {
        if category_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (i32, i64)>(
            r#"
            SELECT category_id, COUNT(*)
            FROM topics
            WHERE category_id = ANY($1)
            GROUP BY category_id
            "#,
        )
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }

    async fn create(&self, topic: &NewTopic) -> Result<Topic, AppError> {
        let row = sqlx::query_as::<_, TopicRow>(
            r#"
            INSERT INTO topics (name, text, category_id, position)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, text, category_id, position, created, updated
            "#,
        )
        .bind(&topic.name)
        .bind(&topic.text)
        .bind(topic.category_id)
        .bind(topic.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, topic.category_id))?;

        tracing::debug!(topic_id = row.id, category_id = row.category_id, "Topic created");
        Ok(row.into_topic())
    }

    async fn update(&self, id: i32, topic: &NewTopic) -> Result<Option<Topic>, AppError> {
        let row = sqlx::query_as::<_, TopicRow>(
            r#"
            UPDATE topics
            SET name = $2,
                text = $3,
                category_id = $4,
                position = $5,
                updated = NOW()
            WHERE id = $1
            RETURNING id, name, text, category_id, position, created, updated
            "#,
        )
        .bind(id)
        .bind(&topic.name)
        .bind(&topic.text)
        .bind(topic.category_id)
        .bind(topic.position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, topic.category_id))?;

        Ok(row.map(|r| r.into_topic()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
