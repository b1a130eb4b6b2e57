//! User service
//!
//! Profile reads and edits. Accounts themselves are provisioned by the
//! external auth provider, so there is no registration path here.

use arena_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's profile by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Get a user's profile by username
    #[instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Update the caller's own profile fields
    ///
    /// Only the fields present in the request change; absent fields keep
    /// their stored value.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(display_name) = request.display_name {
            user.set_display_name(display_name);
        }
        if let Some(avatar_url) = request.avatar_url {
            user.set_avatar_url(Some(avatar_url));
        }
        if let Some(bio) = request.bio {
            user.set_bio(Some(bio));
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(UserResponse::from(&user))
    }
}
