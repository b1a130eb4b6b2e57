//! PostgreSQL implementation of GamingProfileRepository
//!
//! `apply_changes` runs all writes from one profile-set reconciliation in a
//! single transaction. A concurrent reader sees either the old set or the new
//! set, never a half-replaced one.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use arena_core::entities::GamingProfile;
use arena_core::error::DomainError;
use arena_core::traits::{GamingProfileRepository, RepoResult};
use arena_core::value_objects::Snowflake;

use crate::models::GamingProfileModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of GamingProfileRepository
#[derive(Clone)]
pub struct PgGamingProfileRepository {
    pool: PgPool,
}

impl PgGamingProfileRepository {
    /// Create a new PgGamingProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GamingProfileRepository for PgGamingProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<GamingProfile>> {
        let results = sqlx::query_as::<_, GamingProfileModel>(
            r"
            SELECT id, user_id, platform, handle, created_at, updated_at
            FROM gaming_profiles
            WHERE user_id = $1
            ORDER BY platform ASC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GamingProfile::from).collect())
    }

    #[instrument(skip(self, inserts, updates, deletes), fields(
        inserts = inserts.len(),
        updates = updates.len(),
        deletes = deletes.len(),
    ))]
    async fn apply_changes(
        &self,
        user_id: Snowflake,
        inserts: &[GamingProfile],
        updates: &[(Snowflake, String)],
        deletes: &[Snowflake],
    ) -> RepoResult<()> {
        if inserts.is_empty() && updates.is_empty() && deletes.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Deletes first so a platform moving rows cannot trip the
        // (user_id, platform) unique constraint mid-transaction
        for id in deletes {
            sqlx::query("DELETE FROM gaming_profiles WHERE id = $1 AND user_id = $2")
                .bind(id.into_inner())
                .bind(user_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        let now = Utc::now();
        for (id, handle) in updates {
            sqlx::query(
                r"
                UPDATE gaming_profiles
                SET handle = $3, updated_at = $4
                WHERE id = $1 AND user_id = $2
                ",
            )
            .bind(id.into_inner())
            .bind(user_id.into_inner())
            .bind(handle)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        for profile in inserts {
            sqlx::query(
                r"
                INSERT INTO gaming_profiles (id, user_id, platform, handle, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(profile.id.into_inner())
            .bind(user_id.into_inner())
            .bind(&profile.platform)
            .bind(&profile.handle)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    DomainError::PlatformAlreadyLinked(profile.platform.clone())
                })
            })?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
