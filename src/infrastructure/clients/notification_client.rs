//! Notification Service Client

use async_trait::async_trait;
use reqwest::Client;

use super::{fetch_json, join_url};
use crate::application::dto::UserSubscriptionDto;
use crate::application::gateways::NotificationGateway;
use crate::shared::error::AppError;

/// Client for category subscriptions
#[derive(Clone)]
pub struct NotificationClient {
    http: Client,
    base_url: String,
}

impl NotificationClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl NotificationGateway for NotificationClient {
    /// A user without subscriptions (404) gets an empty category list.
    async fn subscriptions(&self, user_id: i32) -> Result<UserSubscriptionDto, AppError> {
        let url = join_url(&self.base_url, &format!("/subscribeCategory/{user_id}"));
        let categories: Vec<i32> = fetch_json("notification", self.http.get(url))
            .await?
            .unwrap_or_default();
        Ok(UserSubscriptionDto { user_id, categories })
    }
}
