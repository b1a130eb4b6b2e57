//! PostgreSQL implementation of ReactionRepository
//!
//! The reactions table carries UNIQUE (post_id, user_id); `insert` surfaces
//! that violation as `ReactionAlreadyExists` so the reconciler can retry a
//! lost race as an update instead of failing the request.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::instrument;

use arena_core::entities::{Reaction, ReactionCounts, ReactionKind};
use arena_core::error::DomainError;
use arena_core::traits::{ReactionRepository, RepoResult};
use arena_core::value_objects::Snowflake;

use crate::models::{PostReactionCountsModel, ReactionCountsModel, ReactionModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn insert(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reactions (post_id, user_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(reaction.post_id.into_inner())
        .bind(reaction.user_id.into_inner())
        .bind(reaction.kind.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_kind(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE reactions SET kind = $3 WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM reactions WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn counts(&self, post_id: Snowflake) -> RepoResult<ReactionCounts> {
        let result = sqlx::query_as::<_, ReactionCountsModel>(
            r"
            SELECT
                COUNT(*) FILTER (WHERE kind = 'like') AS likes,
                COUNT(*) FILTER (WHERE kind = 'dislike') AS dislikes
            FROM reactions
            WHERE post_id = $1
            ",
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ReactionCounts::from(result))
    }

    #[instrument(skip(self, post_ids))]
    async fn counts_for(
        &self,
        post_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, ReactionCounts>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<i64> = post_ids.iter().map(|id| id.into_inner()).collect();
        let rows = sqlx::query_as::<_, PostReactionCountsModel>(
            r"
            SELECT
                post_id,
                COUNT(*) FILTER (WHERE kind = 'like') AS likes,
                COUNT(*) FILTER (WHERE kind = 'dislike') AS dislikes
            FROM reactions
            WHERE post_id = ANY($1)
            GROUP BY post_id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    Snowflake::new(row.post_id),
                    ReactionCounts {
                        likes: row.likes,
                        dislikes: row.dislikes,
                    },
                )
            })
            .collect())
    }

    #[instrument(skip(self, post_ids))]
    async fn kinds_for(
        &self,
        post_ids: &[Snowflake],
        user_id: Snowflake,
    ) -> RepoResult<HashMap<Snowflake, ReactionKind>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<i64> = post_ids.iter().map(|id| id.into_inner()).collect();
        let rows = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = ANY($1) AND user_id = $2
            ",
        )
        .bind(&ids)
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter()
            .map(|row| {
                let kind: ReactionKind = row.kind.parse()?;
                Ok((Snowflake::new(row.post_id), kind))
            })
            .collect()
    }
}
