//! Remote Service Gateways
//!
//! Contracts for the sibling services the site reads from. The reqwest-backed
//! implementations live in `infrastructure::clients`.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::application::dto::{CategoryDto, InterviewDto, ProfileDto, UserInfoDto, UserSubscriptionDto};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Auth service: profiles and token introspection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// One profile; `None` when Auth does not know the id.
    async fn profile_by_id(&self, id: i32) -> Result<Option<ProfileDto>, AppError>;

    async fn all_profiles(&self) -> Result<Vec<ProfileDto>, AppError>;

    /// Profiles for a set of user ids in one call.
    async fn profiles_by_ids(&self, ids: &BTreeSet<i32>) -> Result<Vec<ProfileDto>, AppError>;

    /// The user a session token belongs to.
    async fn user_info(&self, token: &str) -> Result<UserInfoDto, AppError>;
}

/// Catalog (desc) service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn most_popular_categories(&self) -> Result<Vec<CategoryDto>, AppError>;
}

/// Booking (mock) service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewGateway: Send + Sync {
    /// A page of interviews with the given status, newest first.
    async fn interviews_by_status(&self, status: i32, page: PageRequest) -> Result<Page<InterviewDto>, AppError>;
}

/// Notification service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn subscriptions(&self, user_id: i32) -> Result<UserSubscriptionDto, AppError>;
}
