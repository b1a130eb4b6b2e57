//! Global chat handlers
//!
//! Clients poll GET /chat/messages with an `after` cursor for new messages.

use axum::{extract::State, Json};
use arena_service::dto::{ChatMessageResponse, CreateChatMessageRequest};
use arena_service::services::ChatService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List chat messages
///
/// GET /chat/messages
pub async fn list_messages(
    State(state): State<AppState>,
    _auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ChatMessageResponse>>> {
    let service = ChatService::new(state.service_context());
    let messages = service.list_messages(&pagination.into()).await?;
    Ok(Json(messages))
}

/// Send a chat message
///
/// POST /chat/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateChatMessageRequest>,
) -> ApiResult<Created<Json<ChatMessageResponse>>> {
    let service = ChatService::new(state.service_context());
    let response = service.send_message(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}
