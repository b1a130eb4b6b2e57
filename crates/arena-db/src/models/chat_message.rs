//! Chat message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the chat_messages table
#[derive(Debug, Clone, FromRow)]
pub struct ChatMessageModel {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
