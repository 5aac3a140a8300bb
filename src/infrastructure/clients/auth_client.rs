//! Auth Service Client

use std::collections::BTreeSet;

use async_trait::async_trait;
use reqwest::Client;

use super::{fetch_json, fetch_required, join_url};
use crate::application::dto::{ProfileDto, UserInfoDto};
use crate::application::gateways::AuthGateway;
use crate::shared::error::AppError;

const SERVICE: &str = "auth";
const URL_PROFILES: &str = "/profiles/";

/// Client for the Auth service's profile and person endpoints
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AuthGateway for AuthClient {
    async fn profile_by_id(&self, id: i32) -> Result<Option<ProfileDto>, AppError> {
        let url = join_url(&self.base_url, &format!("{URL_PROFILES}{id}"));
        fetch_json(SERVICE, self.http.get(url)).await
    }

    async fn all_profiles(&self) -> Result<Vec<ProfileDto>, AppError> {
        let url = join_url(&self.base_url, URL_PROFILES);
        Ok(fetch_json(SERVICE, self.http.get(url)).await?.unwrap_or_default())
    }

    async fn profiles_by_ids(&self, ids: &BTreeSet<i32>) -> Result<Vec<ProfileDto>, AppError> {
        let url = join_url(&self.base_url, &format!("{URL_PROFILES}ids"));
        let ids = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        tracing::debug!(ids = %ids, "Fetching profiles by id");
        Ok(fetch_json(SERVICE, self.http.get(url).query(&[("ids", ids)]))
            .await?
            .unwrap_or_default())
    }

    async fn user_info(&self, token: &str) -> Result<UserInfoDto, AppError> {
        let url = join_url(&self.base_url, "/person/current");
        fetch_required(SERVICE, self.http.get(url).bearer_auth(token)).await
    }
}
