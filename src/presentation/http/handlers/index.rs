//! Home Page Handler

use axum::{extract::State, Json};

use crate::application::dto::IndexPage;
use crate::presentation::http::extractors::SessionToken;
use crate::shared::error::AppError;
use crate::startup::SiteState;

/// `GET /` and `GET /index`
pub async fn index(State(state): State<SiteState>, token: SessionToken) -> Result<Json<IndexPage>, AppError> {
    Ok(Json(state.index.index_page(token.as_deref()).await?))
}
