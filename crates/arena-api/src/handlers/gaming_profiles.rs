//! Gaming profile handlers
//!
//! PUT /users/@me/gaming-profiles carries the desired end state of the profile set;
//! the service reconciles it against what is stored.

use axum::{
    extract::{Path, State},
    Json,
};
use arena_service::dto::{GamingProfileResponse, ReplaceProfilesRequest};
use arena_service::services::GamingProfileService;

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List the caller's gaming profiles
///
/// GET /users/@me/gaming-profiles
pub async fn get_own_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<GamingProfileResponse>>> {
    let service = GamingProfileService::new(state.service_context());
    let profiles = service.get_profiles(auth.user_id).await?;
    Ok(Json(profiles))
}

/// Replace the caller's full gaming profile set
///
/// PUT /users/@me/gaming-profiles
pub async fn replace_own_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ReplaceProfilesRequest>,
) -> ApiResult<Json<Vec<GamingProfileResponse>>> {
    let service = GamingProfileService::new(state.service_context());
    let profiles = service.replace_profiles(auth.user_id, request).await?;
    Ok(Json(profiles))
}

/// List another user's gaming profiles (public)
///
/// GET /users/{user_id}/gaming-profiles
pub async fn get_user_profiles(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<GamingProfileResponse>>> {
    let user_id = path.user_id()?;

    let service = GamingProfileService::new(state.service_context());
    let profiles = service.get_profiles(user_id).await?;
    Ok(Json(profiles))
}
