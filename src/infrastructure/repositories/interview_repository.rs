//! Interview Repository Implementation
//!
//! PostgreSQL implementation of the InterviewRepository trait with
//! offset pagination over the `interview` table.
//!
//! Unsorted pages come back in insertion order (`id ASC`). A sort on the
//! creation date keeps `id` as a tie-breaker so that page boundaries stay
//! stable when several rows share a timestamp.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Interview, InterviewRepository, NewInterview};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest, SortDirection};

const SELECT_COLUMNS: &str = "id, mode, submitter_id, title, additional, contact_by, \
                              approximate_date, create_date, topic_id, status";

/// Internal row type for interview queries.
#[derive(Debug, sqlx::FromRow)]
struct InterviewRow {
    id: i32,
    mode: i32,
    submitter_id: i32,
    title: String,
    additional: String,
    contact_by: String,
    approximate_date: String,
    create_date: DateTime<Utc>,
    topic_id: i32,
    status: i32,
}

impl InterviewRow {
    fn into_interview(self) -> Interview {
        Interview {
            id: self.id,
            mode: self.mode,
            submitter_id: self.submitter_id,
            title: self.title,
            additional: self.additional,
            contact_by: self.contact_by,
            approximate_date: self.approximate_date,
            create_date: self.create_date,
            topic_id: self.topic_id,
            status: self.status,
        }
    }
}

/// `ORDER BY` clause for a page request.
fn order_clause(sort: Option<SortDirection>) -> String {
    match sort {
        None => "ORDER BY id ASC".to_string(),
        Some(direction) => format!(
            "ORDER BY create_date {dir}, id {dir}",
            dir = direction.as_sql()
        ),
    }
}

/// PostgreSQL interview repository implementation.
#[derive(Clone)]
pub struct PgInterviewRepository {
    pool: PgPool,
}

impl PgInterviewRepository {
    /// Creates a new PgInterviewRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewRepository for PgInterviewRepository {
    /// Find an interview by its ID.
    ///
    /// Returns None if the interview does not exist.
    async fn find_by_id(&self, id: i32) -> Result<Option<Interview>, AppError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM interview WHERE id = $1");
        let row = sqlx::query_as::<_, InterviewRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_interview()))
    }

    async fn find_by_mode(&self, mode: i32) -> Result<Vec<Interview>, AppError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM interview WHERE mode = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, InterviewRow>(&sql)
            .bind(mode)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_interview()).collect())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<Interview>, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM interview")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM interview {} LIMIT $1 OFFSET $2",
            order_clause(page.sort)
        );
        let rows = sqlx::query_as::<_, InterviewRow>(&sql)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(
            rows.into_iter().map(|r| r.into_interview()).collect(),
            total,
            page,
        ))
    }

    async fn find_by_topic_id(&self, topic_id: i32, page: PageRequest) -> Result<Page<Interview>, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM interview WHERE topic_id = $1")
            .bind(topic_id)
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM interview WHERE topic_id = $1 {} LIMIT $2 OFFSET $3",
            order_clause(page.sort)
        );
        let rows = sqlx::query_as::<_, InterviewRow>(&sql)
            .bind(topic_id)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(
            rows.into_iter().map(|r| r.into_interview()).collect(),
            total,
            page,
        ))
    }

    async fn find_by_topic_id_in(
        &self,
        topic_ids: &[i32],
        page: PageRequest,
    ) -> Result<Page<Interview>, AppError> {
        if topic_ids.is_empty() {
            return Ok(Page::empty(page));
        }

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM interview WHERE topic_id = ANY($1)",
        )
        .bind(topic_ids)
        .fetch_one(&self.pool)
        .await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM interview WHERE topic_id = ANY($1) {} LIMIT $2 OFFSET $3",
            order_clause(page.sort)
        );
        let rows = sqlx::query_as::<_, InterviewRow>(&sql)
            .bind(topic_ids)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(
            rows.into_iter().map(|r| r.into_interview()).collect(),
            total,
            page,
        ))
    }

    async fn find_by_status(&self, status: i32, page: PageRequest) -> Result<Page<Interview>, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM interview WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM interview WHERE status = $1 {} LIMIT $2 OFFSET $3",
            order_clause(page.sort)
        );
        let rows = sqlx::query_as::<_, InterviewRow>(&sql)
            .bind(status)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(
            rows.into_iter().map(|r| r.into_interview()).collect(),
            total,
            page,
        ))
    }

    /// Update the status of one interview.
    ///
    /// An unknown id is a no-op and reports zero affected rows.
    async fn update_status(&self, id: i32, status: i32) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE interview SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        tracing::debug!(interview_id = id, status, rows = result.rows_affected(), "Interview status updated");
        Ok(result.rows_affected())
    }

    async fn save(&self, interview: &NewInterview) -> Result<Interview, AppError> {
        let sql = format!(
            r#"
            INSERT INTO interview (mode, submitter_id, title, additional, contact_by,
                                   approximate_date, create_date, topic_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SELECT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, InterviewRow>(&sql)
            .bind(interview.mode)
            .bind(interview.submitter_id)
            .bind(&interview.title)
            .bind(&interview.additional)
            .bind(&interview.contact_by)
            .bind(&interview.approximate_date)
            .bind(interview.create_date)
            .bind(interview.topic_id)
            .bind(interview.status)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into_interview())
    }
}
