//! Global chat service
//!
//! The chat is a single global room read over REST. Clients poll with an
//! `after` cursor set to the newest message they have seen.

use arena_core::entities::ChatMessage;
use arena_core::traits::CursorQuery;
use arena_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{ChatMessageResponse, CreateChatMessageRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List chat messages honoring the cursor
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        query: &CursorQuery,
    ) -> ServiceResult<Vec<ChatMessageResponse>> {
        let messages = self.ctx.chat_repo().list(query).await?;
        Ok(messages.iter().map(ChatMessageResponse::from).collect())
    }

    /// Append a message to the global chat
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        author_id: Snowflake,
        request: CreateChatMessageRequest,
    ) -> ServiceResult<ChatMessageResponse> {
        let message = ChatMessage::new(self.ctx.generate_id(), author_id, request.content);
        self.ctx.chat_repo().create(&message).await?;

        info!(message_id = %message.id, author_id = %author_id, "Chat message sent");

        Ok(ChatMessageResponse::from(&message))
    }
}
