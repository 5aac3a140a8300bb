//! Auth and notification payloads
//!
//! Owned by external services; the site only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public user profile served by the Auth service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub photo_id: Option<i32>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Role granted to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDto {
    pub value: String,
}

/// The user behind a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoDto {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleDto>,
}

impl UserInfoDto {
    pub const ADMIN_ROLE: &'static str = "ROLE_ADMIN";

    /// Whether the user may manage catalog content
    pub fn can_manage(&self) -> bool {
        self.roles.iter().any(|role| role.value == Self::ADMIN_ROLE)
    }
}

/// Categories a user receives notifications for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscriptionDto {
    pub user_id: i32,
    pub categories: Vec<i32>,
}
