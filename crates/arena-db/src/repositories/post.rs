//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::Post;
use arena_core::traits::{CursorQuery, PostRepository, RepoResult};
use arena_core::value_objects::Snowflake;

use crate::models::PostModel;

use super::error::map_db_error;

const POST_COLUMNS: &str = "id, author_id, title, content, image_url, created_at, updated_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &CursorQuery) -> RepoResult<Vec<Post>> {
        let limit = query.limit.clamp(1, 100);

        let results = match (query.before, query.after) {
            (Some(before), _) => {
                // Scrolling down the feed (older posts)
                sqlx::query_as::<_, PostModel>(&format!(
                    "SELECT {POST_COLUMNS} FROM posts WHERE id < $1 ORDER BY id DESC LIMIT $2"
                ))
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(after)) => {
                // Fetching newer posts
                sqlx::query_as::<_, PostModel>(&format!(
                    "SELECT {POST_COLUMNS} FROM posts WHERE id > $1 ORDER BY id ASC LIMIT $2"
                ))
                .bind(after.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, None) => {
                // Latest posts (no cursor)
                sqlx::query_as::<_, PostModel>(&format!(
                    "SELECT {POST_COLUMNS} FROM posts ORDER BY id DESC LIMIT $1"
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO posts (id, author_id, title, content, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE posts
            SET title = $2, content = $3, image_url = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Comments and reactions cascade via foreign keys
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
