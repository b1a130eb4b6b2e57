//! Chat message entity <-> model mapper

use arena_core::entities::ChatMessage;
use arena_core::value_objects::Snowflake;

use crate::models::ChatMessageModel;

impl From<ChatMessageModel> for ChatMessage {
    fn from(model: ChatMessageModel) -> Self {
        ChatMessage {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
