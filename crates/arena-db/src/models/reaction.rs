//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactions table
///
/// The table has a UNIQUE constraint on (post_id, user_id); `kind` holds the
/// stable string form ("like" / "dislike").
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub post_id: i64,
    pub user_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated like/dislike tally (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountsModel {
    pub likes: i64,
    pub dislikes: i64,
}

/// Per-post tally row for batched feed queries
#[derive(Debug, Clone, FromRow)]
pub struct PostReactionCountsModel {
    pub post_id: i64,
    pub likes: i64,
    pub dislikes: i64,
}
