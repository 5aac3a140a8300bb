//! Home page view model

use serde::{Deserialize, Serialize};

use super::{CategoryDto, InterviewDto, ProfileDto, UserInfoDto, UserSubscriptionDto};

/// One breadcrumb link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

/// Everything the home page shows.
///
/// Personalised fields stay empty when no token was sent or when the
/// remote services behind them failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPage {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub categories: Vec<CategoryDto>,
    pub user_info: Option<UserInfoDto>,
    pub subscriptions: Option<UserSubscriptionDto>,
    pub can_manage: bool,
    pub new_interviews: Vec<InterviewDto>,
    pub users: Vec<ProfileDto>,
}
