//! Reaction handlers
//!
//! One POST endpoint reconciles the caller's reaction; the response reports
//! whether the reaction was created, updated or removed, plus fresh tallies.

use axum::{
    extract::{Path, State},
    Json,
};
use arena_service::dto::{ReactRequest, ReactionResponse, ReactionSummaryResponse};
use arena_service::services::ReactionService;

use crate::extractors::{AuthUser, OptionalAuthUser, PostIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Reconcile the caller's reaction on a post
///
/// POST /posts/{post_id}/reactions
pub async fn react(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    Json(request): Json<ReactRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let response = service
        .react(post_id, auth.user_id, &request.kind)
        .await?;
    Ok(Json(response))
}

/// Current tallies and the caller's own reaction
///
/// GET /posts/{post_id}/reactions
pub async fn get_reactions(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<ReactionSummaryResponse>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let response = service.summary(post_id, auth.user_id()).await?;
    Ok(Json(response))
}

/// Remove the caller's reaction
///
/// DELETE /posts/{post_id}/reactions
pub async fn remove_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<ReactionResponse>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let response = service.remove(post_id, auth.user_id).await?;
    Ok(Json(response))
}
