//! Reaction entity <-> model mapper

use arena_core::entities::{Reaction, ReactionCounts};
use arena_core::error::DomainError;
use arena_core::value_objects::Snowflake;

use crate::models::{ReactionCountsModel, ReactionModel};

/// Fallible because `kind` is stored as text; a row with an unknown kind
/// means the table was written outside this application.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            post_id: Snowflake::new(model.post_id),
            user_id: Snowflake::new(model.user_id),
            kind: model.kind.parse()?,
            created_at: model.created_at,
        })
    }
}

impl From<ReactionCountsModel> for ReactionCounts {
    fn from(model: ReactionCountsModel) -> Self {
        ReactionCounts {
            likes: model.likes,
            dislikes: model.dislikes,
        }
    }
}
