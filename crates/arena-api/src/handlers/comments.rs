//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use arena_service::dto::{CommentResponse, CreateCommentRequest};
use arena_service::services::CommentService;

use crate::extractors::{AuthUser, CommentPath, Pagination, PostIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List comments on a post, oldest first
///
/// GET /posts/{post_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let post_id = path.post_id()?;

    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(post_id, &pagination.into()).await?;
    Ok(Json(comments))
}

/// Add a comment to a post
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let post_id = path.post_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(post_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Delete a comment
///
/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<NoContent> {
    let post_id = path.post_id()?;
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    service
        .delete_comment(post_id, comment_id, auth.user_id)
        .await?;
    Ok(NoContent)
}
