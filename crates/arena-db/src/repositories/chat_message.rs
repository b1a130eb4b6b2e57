//! PostgreSQL implementation of ChatMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::ChatMessage;
use arena_core::traits::{ChatMessageRepository, CursorQuery, RepoResult};

use crate::models::ChatMessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChatMessageRepository
#[derive(Clone)]
pub struct PgChatMessageRepository {
    pool: PgPool,
}

impl PgChatMessageRepository {
    /// Create a new PgChatMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatMessageRepository for PgChatMessageRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: &CursorQuery) -> RepoResult<Vec<ChatMessage>> {
        let limit = query.limit.clamp(1, 100);

        let results = match (query.before, query.after) {
            (Some(before), _) => {
                // Scrolling back through history
                sqlx::query_as::<_, ChatMessageModel>(
                    r"
                    SELECT id, author_id, content, created_at
                    FROM chat_messages
                    WHERE id < $1
                    ORDER BY id DESC
                    LIMIT $2
                    ",
                )
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(after)) => {
                // Polling for messages since the last one seen
                sqlx::query_as::<_, ChatMessageModel>(
                    r"
                    SELECT id, author_id, content, created_at
                    FROM chat_messages
                    WHERE id > $1
                    ORDER BY id ASC
                    LIMIT $2
                    ",
                )
                .bind(after.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, None) => {
                sqlx::query_as::<_, ChatMessageModel>(
                    r"
                    SELECT id, author_id, content, created_at
                    FROM chat_messages
                    ORDER BY id DESC
                    LIMIT $1
                    ",
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ChatMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, message: &ChatMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO chat_messages (id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.author_id.into_inner())
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
