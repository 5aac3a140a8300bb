//! Profile Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::ProfileDto;
use crate::shared::error::AppError;
use crate::startup::SiteState;

pub async fn get_profile(State(state): State<SiteState>, Path(id): Path<i32>) -> Result<Json<ProfileDto>, AppError> {
    state
        .profiles
        .get_profile_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))
}

pub async fn list_profiles(State(state): State<SiteState>) -> Result<Json<Vec<ProfileDto>>, AppError> {
    Ok(Json(state.profiles.get_all_profiles().await?))
}
