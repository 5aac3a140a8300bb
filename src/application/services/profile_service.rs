//! Profiles Service
//!
//! Profile lookups against the Auth service.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::dto::{InterviewDto, ProfileDto};
use crate::application::gateways::AuthGateway;
use crate::shared::error::AppError;

/// Reads user profiles from Auth
#[derive(Clone)]
pub struct ProfilesService {
    auth: Arc<dyn AuthGateway>,
}

impl ProfilesService {
    pub fn new(auth: Arc<dyn AuthGateway>) -> Self {
        Self { auth }
    }

    /// One profile by user id
    pub async fn get_profile_by_id(&self, id: i32) -> Result<Option<ProfileDto>, AppError> {
        self.auth.profile_by_id(id).await
    }

    /// Every profile Auth knows about
    pub async fn get_all_profiles(&self) -> Result<Vec<ProfileDto>, AppError> {
        self.auth.all_profiles().await
    }

    /// Profiles of the submitters of `interviews`.
    ///
    /// Submitter ids are deduplicated and fetched in a single call; the result
    /// holds each profile once, ordered by id.
    pub async fn get_all_profiles_by_id(&self, interviews: &[InterviewDto]) -> Result<Vec<ProfileDto>, AppError> {
        let ids: BTreeSet<i32> = interviews.iter().map(|i| i.submitter_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut profiles = self.auth.profiles_by_ids(&ids).await?;
        profiles.sort_by_key(|p| p.id);
        profiles.dedup_by_key(|p| p.id);
        Ok(profiles)
    }
}
