//! Category Handlers

use axum::{extract::State, Json};

use crate::application::dto::CategoryDto;
use crate::shared::error::AppError;
use crate::startup::DescState;

/// All categories ordered by position
pub async fn list_categories(State(state): State<DescState>) -> Result<Json<Vec<CategoryDto>>, AppError> {
    Ok(Json(state.categories.get_all().await?))
}

/// Most booked categories
pub async fn most_popular(State(state): State<DescState>) -> Result<Json<Vec<CategoryDto>>, AppError> {
    Ok(Json(state.categories.get_most_popular().await?))
}
