//! Topic Handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::TopicRequest;
use crate::application::dto::TopicDto;
use crate::domain::Topic;
use crate::presentation::http::extractors::IdList;
use crate::shared::error::AppError;
use crate::shared::validation::validate_request;
use crate::startup::DescState;

/// All topics
pub async fn list_topics(State(state): State<DescState>) -> Result<Json<Vec<Topic>>, AppError> {
    Ok(Json(state.topics.get_all().await?))
}

/// Topics of a category
pub async fn topics_by_category(
    State(state): State<DescState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<Topic>>, AppError> {
    Ok(Json(state.topics.find_by_category(category_id).await?))
}

/// Topic projections of a category
pub async fn topic_dtos_by_category(
    State(state): State<DescState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<TopicDto>>, AppError> {
    Ok(Json(state.topics.get_topic_dtos_by_category_id(category_id).await?))
}

/// Topic count per requested category id
pub async fn topics_count(
    State(state): State<DescState>,
    IdList(ids): IdList,
) -> Result<Json<BTreeMap<i32, i64>>, AppError> {
    Ok(Json(state.topics.get_topics_count_for_categories(&ids).await?))
}

pub async fn get_topic(State(state): State<DescState>, Path(id): Path<i32>) -> Result<Json<Topic>, AppError> {
    Ok(Json(state.topics.get_by_id(id).await?))
}

pub async fn create_topic(
    State(state): State<DescState>,
    Json(body): Json<TopicRequest>,
) -> Result<(StatusCode, Json<Topic>), AppError> {
    validate_request(&body)?;

    let topic = state.topics.create(body.into()).await?;
    tracing::info!(topic_id = topic.id, category_id = topic.category_id, "Topic created");

    Ok((StatusCode::CREATED, Json(topic)))
}

pub async fn update_topic(
    State(state): State<DescState>,
    Path(id): Path<i32>,
    Json(body): Json<TopicRequest>,
) -> Result<Json<Topic>, AppError> {
    validate_request(&body)?;
    Ok(Json(state.topics.update(id, body.into()).await?))
}

pub async fn delete_topic(State(state): State<DescState>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    state.topics.delete(id).await?;
    tracing::info!(topic_id = id, "Topic deleted");
    Ok(StatusCode::NO_CONTENT)
}
