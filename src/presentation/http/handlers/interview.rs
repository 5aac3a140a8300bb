//! Interview Handlers
//!
//! Booking endpoints of the `mock` service. Paged listings accept
//! `?page=&size=` and, where noted, `&sort=asc|desc` on the create date.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateInterviewRequest, PageQuery, StatusQuery};
use crate::application::dto::{InterviewDto, StatusUpdateResponse};
use crate::presentation::http::extractors::parse_id_list;
use crate::shared::error::AppError;
use crate::shared::pagination::Page;
use crate::shared::validation::validate_request;
use crate::startup::MockState;

pub async fn get_interview(
    State(state): State<MockState>,
    Path(id): Path<i32>,
) -> Result<Json<InterviewDto>, AppError> {
    Ok(Json(state.interviews.get_by_id(id).await?))
}

/// Book an interview
pub async fn create_interview(
    State(state): State<MockState>,
    Json(body): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewDto>), AppError> {
    validate_request(&body)?;
    let interview = state.interviews.create(body).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

/// `PUT /interview/status/{id}?status=N`
pub async fn update_status(
    State(state): State<MockState>,
    Path(id): Path<i32>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusUpdateResponse>, AppError> {
    let updated = state.interviews.update_status(id, query.status).await?;
    Ok(Json(StatusUpdateResponse { updated }))
}

pub async fn list_interviews(
    State(state): State<MockState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<InterviewDto>>, AppError> {
    Ok(Json(state.interviews.find_all(query.into_request()).await?))
}

pub async fn find_by_mode(
    State(state): State<MockState>,
    Path(mode): Path<i32>,
) -> Result<Json<Vec<InterviewDto>>, AppError> {
    Ok(Json(state.interviews.find_by_mode(mode).await?))
}

pub async fn find_by_topic_id(
    State(state): State<MockState>,
    Path(topic_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<InterviewDto>>, AppError> {
    Ok(Json(
        state
            .interviews
            .find_by_topic_id(topic_id, query.into_request())
            .await?,
    ))
}

/// `{ids}` is a comma-separated list of topic ids
pub async fn find_by_topic_ids(
    State(state): State<MockState>,
    Path(ids): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<InterviewDto>>, AppError> {
    let topic_ids = parse_id_list(&ids)?;
    Ok(Json(
        state
            .interviews
            .find_by_topic_ids(&topic_ids, query.into_request())
            .await?,
    ))
}

pub async fn find_by_status(
    State(state): State<MockState>,
    Path(status): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<InterviewDto>>, AppError> {
    Ok(Json(
        state
            .interviews
            .find_by_status(status, query.into_request())
            .await?,
    ))
}
