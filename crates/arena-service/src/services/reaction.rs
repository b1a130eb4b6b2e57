//! Reaction service
//!
//! Reconciles a user's like/dislike against a post. The decision itself is
//! pure (`ReactionDecision::reconcile`); this service loads the stored state,
//! applies the decided write and reports the outcome with fresh tallies.

use std::str::FromStr;

use arena_core::entities::{Reaction, ReactionDecision, ReactionKind, ReactionOutcome};
use arena_core::error::DomainError;
use arena_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{ReactionCountsResponse, ReactionResponse, ReactionSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reconcile the caller's reaction on a post
    ///
    /// Same kind as stored toggles the reaction off, the opposite kind flips
    /// it, and no stored reaction creates one. Exactly one write per call.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: &str,
    ) -> ServiceResult<ReactionResponse> {
        let requested = ReactionKind::from_str(kind)?;

        // The post must exist before any reaction state is touched
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let stored = self
            .ctx
            .reaction_repo()
            .find(post_id, user_id)
            .await?
            .map(|r| r.kind);

        let decision = ReactionDecision::reconcile(stored, requested);
        let outcome = self.apply(post_id, user_id, &decision).await?;

        info!(
            post_id = %post_id,
            user_id = %user_id,
            kind = %requested.as_str(),
            outcome = ?outcome,
            "Reaction reconciled"
        );

        let counts = self.ctx.reaction_repo().counts(post_id).await?;

        Ok(ReactionResponse {
            outcome,
            kind: decision.resulting_kind(),
            counts: ReactionCountsResponse::from(counts),
        })
    }

    /// Current tallies for a post, with the viewer's own kind when known
    #[instrument(skip(self))]
    pub async fn summary(
        &self,
        post_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<ReactionSummaryResponse> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let counts = self.ctx.reaction_repo().counts(post_id).await?;
        let my_reaction = match viewer_id {
            Some(viewer) => self
                .ctx
                .reaction_repo()
                .find(post_id, viewer)
                .await?
                .map(|r| r.kind),
            None => None,
        };

        Ok(ReactionSummaryResponse {
            likes: counts.likes,
            dislikes: counts.dislikes,
            my_reaction,
        })
    }

    /// Remove the caller's reaction regardless of its kind
    #[instrument(skip(self))]
    pub async fn remove(&self, post_id: Snowflake, user_id: Snowflake) -> ServiceResult<ReactionResponse> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        self.ctx.reaction_repo().delete(post_id, user_id).await?;

        let counts = self.ctx.reaction_repo().counts(post_id).await?;

        Ok(ReactionResponse {
            outcome: ReactionOutcome::Removed,
            kind: None,
            counts: ReactionCountsResponse::from(counts),
        })
    }

    /// Execute the decided write, retrying a lost insert race as an update
    async fn apply(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        decision: &ReactionDecision,
    ) -> ServiceResult<ReactionOutcome> {
        match decision {
            ReactionDecision::Insert(kind) => {
                let reaction = Reaction::new(post_id, user_id, *kind);
                match self.ctx.reaction_repo().insert(&reaction).await {
                    Ok(()) => Ok(ReactionOutcome::Created),
                    Err(DomainError::ReactionAlreadyExists) => {
                        // Another request inserted between our read and write.
                        // The row exists now, so converge on the requested kind.
                        warn!(
                            post_id = %post_id,
                            user_id = %user_id,
                            "Lost reaction insert race, converging as update"
                        );
                        self.ctx
                            .reaction_repo()
                            .update_kind(post_id, user_id, *kind)
                            .await?;
                        Ok(ReactionOutcome::Updated)
                    }
                    Err(e) => Err(e.into()),
                }
            }
            ReactionDecision::Flip(kind) => {
                self.ctx
                    .reaction_repo()
                    .update_kind(post_id, user_id, *kind)
                    .await?;
                Ok(ReactionOutcome::Updated)
            }
            ReactionDecision::Remove => {
                self.ctx.reaction_repo().delete(post_id, user_id).await?;
                Ok(ReactionOutcome::Removed)
            }
        }
    }
}
