//! Custom Extractors
//!
//! Axum extractors for id lists and the optional session token.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    extract::Query,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::Deserialize;

use crate::shared::error::AppError;

/// Parse a comma-separated list of integer ids, ignoring blank entries.
pub fn parse_id_list(raw: &str) -> Result<Vec<i32>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", s)))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct IdsQuery {
    #[serde(default)]
    ids: Vec<String>,
}

/// `?ids=` query parameter; accepts `ids=1,2` and `ids=1&ids=2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList(pub Vec<i32>);

impl<S> FromRequestParts<S> for IdList
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = parts
            .extract::<Query<IdsQuery>>()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if query.ids.is_empty() {
            return Err(AppError::BadRequest("Missing ids parameter".to_string()));
        }

        let mut ids = Vec::new();
        for raw in &query.ids {
            ids.extend(parse_id_list(raw)?);
        }
        Ok(IdList(ids))
    }
}

/// Bearer token of the caller, if any.
///
/// A missing or malformed `Authorization` header yields `None`; the token is
/// only forwarded to the Auth service, never checked here.
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());
        Ok(SessionToken(token))
    }
}
