//! Post handlers
//!
//! Endpoints for the community feed.

use axum::{
    extract::{Path, State},
    Json,
};
use arena_service::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use arena_service::services::PostService;

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, PostIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List posts, newest first
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service
        .list_posts(&pagination.into(), auth.user_id())
        .await?;
    Ok(Json(posts))
}

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a post by ID
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.get_post(post_id, auth.user_id()).await?;
    Ok(Json(response))
}

/// Edit a post
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.update_post(post_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<NoContent> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    service.delete_post(post_id, auth.user_id).await?;
    Ok(NoContent)
}
