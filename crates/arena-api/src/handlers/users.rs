//! User handlers
//!
//! Endpoints for user profile reads and edits.

use axum::{
    extract::{Path, State},
    Json,
};
use arena_service::dto::{UpdateUserRequest, UserResponse};
use arena_service::services::UserService;

use crate::extractors::{AuthUser, UserIdPath, UsernamePath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Get user by ID (public)
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Get user by username (public)
///
/// GET /users/by-username/{username}
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(path): Path<UsernamePath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user_by_username(path.username()).await?;
    Ok(Json(response))
}
