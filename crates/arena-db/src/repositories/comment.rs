//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::Comment;
use arena_core::traits::{CommentRepository, CursorQuery, RepoResult};
use arena_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, author_id, content, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(
        &self,
        post_id: Snowflake,
        query: &CursorQuery,
    ) -> RepoResult<Vec<Comment>> {
        let limit = query.limit.clamp(1, 100);

        // Comments read oldest first, so the cursors walk ascending IDs
        let results = match (query.before, query.after) {
            (Some(before), _) => {
                sqlx::query_as::<_, CommentModel>(
                    r"
                    SELECT id, post_id, author_id, content, created_at
                    FROM comments
                    WHERE post_id = $1 AND id < $2
                    ORDER BY id ASC
                    LIMIT $3
                    ",
                )
                .bind(post_id.into_inner())
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(after)) => {
                sqlx::query_as::<_, CommentModel>(
                    r"
                    SELECT id, post_id, author_id, content, created_at
                    FROM comments
                    WHERE post_id = $1 AND id > $2
                    ORDER BY id ASC
                    LIMIT $3
                    ",
                )
                .bind(post_id.into_inner())
                .bind(after.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, None) => {
                sqlx::query_as::<_, CommentModel>(
                    r"
                    SELECT id, post_id, author_id, content, created_at
                    FROM comments
                    WHERE post_id = $1
                    ORDER BY id ASC
                    LIMIT $2
                    ",
                )
                .bind(post_id.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, post_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.post_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
