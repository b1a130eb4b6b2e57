//! Gaming profile service
//!
//! Replacing a user's profile set is reconciliation, not delete-then-insert:
//! the stored and desired sets are diffed (`diff_profiles`) and only the real
//! changes are written, atomically. Unchanged rows keep their IDs and
//! timestamps.

use std::collections::HashSet;

use arena_core::entities::{diff_profiles, GamingProfile, ProfileChange};
use arena_core::error::DomainError;
use arena_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{GamingProfileResponse, ReplaceProfilesRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Gaming profile service
pub struct GamingProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GamingProfileService<'a> {
    /// Create a new GamingProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a user's gaming profiles
    #[instrument(skip(self))]
    pub async fn get_profiles(&self, user_id: Snowflake) -> ServiceResult<Vec<GamingProfileResponse>> {
        let profiles = self.ctx.profile_repo().find_by_user(user_id).await?;
        Ok(profiles.iter().map(GamingProfileResponse::from).collect())
    }

    /// Replace the caller's full profile set
    ///
    /// The request carries the desired end state. Platforms are normalized to
    /// lowercase and must be unique within the request.
    #[instrument(skip(self, request))]
    pub async fn replace_profiles(
        &self,
        user_id: Snowflake,
        request: ReplaceProfilesRequest,
    ) -> ServiceResult<Vec<GamingProfileResponse>> {
        let desired: Vec<(String, String)> = request
            .profiles
            .into_iter()
            .map(|p| (p.platform.to_lowercase(), p.handle))
            .collect();

        let mut seen = HashSet::new();
        for (platform, _) in &desired {
            if !seen.insert(platform.clone()) {
                return Err(DomainError::DuplicatePlatform(platform.clone()).into());
            }
        }

        let stored = self.ctx.profile_repo().find_by_user(user_id).await?;
        let changes = diff_profiles(&stored, &desired);

        let mut inserts = Vec::new();
        let mut updates = Vec::new();
        let mut deletes = Vec::new();
        for change in changes {
            match change {
                ProfileChange::Insert { platform, handle } => inserts.push(GamingProfile::new(
                    self.ctx.generate_id(),
                    user_id,
                    platform,
                    handle,
                )),
                ProfileChange::Update { id, handle } => updates.push((id, handle)),
                ProfileChange::Delete { id } => deletes.push(id),
            }
        }

        self.ctx
            .profile_repo()
            .apply_changes(user_id, &inserts, &updates, &deletes)
            .await?;

        info!(
            user_id = %user_id,
            inserted = inserts.len(),
            updated = updates.len(),
            deleted = deletes.len(),
            "Gaming profiles reconciled"
        );

        self.get_profiles(user_id).await
    }
}
