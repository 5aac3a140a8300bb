//! Interview Service
//!
//! Booking operations of the `mock` service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::dto::request::CreateInterviewRequest;
use crate::application::dto::InterviewDto;
use crate::domain::{InterviewRepository, InterviewStatus, NewInterview};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Interview service trait
#[async_trait]
pub trait InterviewService: Send + Sync {
    /// Get interview by ID
    async fn get_by_id(&self, id: i32) -> Result<InterviewDto, InterviewError>;

    /// All interviews with a mode
    async fn find_by_mode(&self, mode: i32) -> Result<Vec<InterviewDto>, InterviewError>;

    /// Page over every interview
    async fn find_all(&self, page: PageRequest) -> Result<Page<InterviewDto>, InterviewError>;

    /// Page of interviews for one topic
    async fn find_by_topic_id(&self, topic_id: i32, page: PageRequest) -> Result<Page<InterviewDto>, InterviewError>;

    /// Page of interviews for several topics
    async fn find_by_topic_ids(
        &self,
        topic_ids: &[i32],
        page: PageRequest,
    ) -> Result<Page<InterviewDto>, InterviewError>;

    /// Page of interviews with a status
    async fn find_by_status(&self, status: i32, page: PageRequest) -> Result<Page<InterviewDto>, InterviewError>;

    /// Set an interview's status; returns rows changed (0 for unknown ids)
    async fn update_status(&self, id: i32, status: i32) -> Result<u64, InterviewError>;

    /// Book a new interview with status "new"
    async fn create(&self, request: CreateInterviewRequest) -> Result<InterviewDto, InterviewError>;
}

/// Interview service errors
#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("Interview not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for InterviewError {
    fn from(err: AppError) -> Self {
        InterviewError::Internal(err.to_string())
    }
}

impl From<InterviewError> for AppError {
    fn from(err: InterviewError) -> Self {
        match err {
            InterviewError::NotFound => AppError::NotFound("Interview not found".into()),
            InterviewError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// InterviewService implementation
pub struct InterviewServiceImpl<R>
where
    R: InterviewRepository,
{
    interview_repo: Arc<R>,
}

impl<R> InterviewServiceImpl<R>
where
    R: InterviewRepository,
{
    pub fn new(interview_repo: Arc<R>) -> Self {
        Self { interview_repo }
    }
}

#[async_trait]
impl<R> InterviewService for InterviewServiceImpl<R>
where
    R: InterviewRepository + 'static,
{
    async fn get_by_id(&self, id: i32) -> Result<InterviewDto, InterviewError> {
        self.interview_repo
            .find_by_id(id)
            .await?
            .map(InterviewDto::from)
            .ok_or(InterviewError::NotFound)
    }

    async fn find_by_mode(&self, mode: i32) -> Result<Vec<InterviewDto>, InterviewError> {
        let interviews = self.interview_repo.find_by_mode(mode).await?;
        Ok(interviews.into_iter().map(InterviewDto::from).collect())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<InterviewDto>, InterviewError> {
        Ok(self.interview_repo.find_all(page).await?.map(InterviewDto::from))
    }

    async fn find_by_topic_id(&self, topic_id: i32, page: PageRequest) -> Result<Page<InterviewDto>, InterviewError> {
        Ok(self
            .interview_repo
            .find_by_topic_id(topic_id, page)
            .await?
            .map(InterviewDto::from))
    }

    async fn find_by_topic_ids(
        &self,
        topic_ids: &[i32],
        page: PageRequest,
    ) -> Result<Page<InterviewDto>, InterviewError> {
        Ok(self
            .interview_repo
            .find_by_topic_id_in(topic_ids, page)
            .await?
            .map(InterviewDto::from))
    }

    async fn find_by_status(&self, status: i32, page: PageRequest) -> Result<Page<InterviewDto>, InterviewError> {
        Ok(self
            .interview_repo
            .find_by_status(status, page)
            .await?
            .map(InterviewDto::from))
    }

    async fn update_status(&self, id: i32, status: i32) -> Result<u64, InterviewError> {
        let updated = self.interview_repo.update_status(id, status).await?;
        if updated == 0 {
            tracing::debug!(interview_id = id, "Status update matched no interview");
        }
        Ok(updated)
    }

    async fn create(&self, request: CreateInterviewRequest) -> Result<InterviewDto, InterviewError> {
        let interview = NewInterview {
            mode: request.mode,
            submitter_id: request.submitter_id,
            title: request.title,
            additional: request.additional,
            contact_by: request.contact_by,
            approximate_date: request.approximate_date,
            create_date: Utc::now(),
            topic_id: request.topic_id,
            status: InterviewStatus::New.id(),
        };

        let saved = self.interview_repo.save(&interview).await?;
        tracing::info!(interview_id = saved.id, topic_id = saved.topic_id, "Interview booked");
        Ok(InterviewDto::from(saved))
    }
}
