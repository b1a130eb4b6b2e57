//! ChatMessage entity - a message in the single global chat room

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Chat message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new ChatMessage
    pub fn new(id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Get a truncated preview of the message
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}
