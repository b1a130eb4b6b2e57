//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::entities::{
    ChatMessage, Comment, GamingProfile, Post, Reaction, ReactionCounts, ReactionKind, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Cursor pagination for list queries
#[derive(Debug, Clone, Default)]
pub struct CursorQuery {
    /// Return items with IDs strictly below this cursor
    pub before: Option<Snowflake>,
    /// Return items with IDs strictly above this cursor
    pub after: Option<Snowflake>,
    /// Maximum number of items (implementations clamp to a sane range)
    pub limit: i64,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Update an existing user's profile fields
    async fn update(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// List posts, newest first, honoring the cursor
    async fn list(&self, query: &CursorQuery) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post (cascades to comments and reactions)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments on a post, oldest first, honoring the cursor
    async fn find_by_post(&self, post_id: Snowflake, query: &CursorQuery)
        -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Point lookups and single writes keyed by (post_id, user_id).
///
/// Implementations must back this with a uniqueness constraint on the key
/// pair so concurrent reconciliation attempts serialize at the store.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction one user holds on one post
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Insert a reaction; fails with `ReactionAlreadyExists` if the key pair
    /// is already present (lost race)
    async fn insert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Update the kind of an existing reaction
    async fn update_kind(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<()>;

    /// Delete the reaction for the key pair
    async fn delete(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;

    /// Tally likes and dislikes for a post
    async fn counts(&self, post_id: Snowflake) -> RepoResult<ReactionCounts>;

    /// Tally likes and dislikes for many posts in one round trip
    ///
    /// Posts with no reactions are absent from the returned map.
    async fn counts_for(
        &self,
        post_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, ReactionCounts>>;

    /// Fetch one user's reaction kind across many posts in one round trip
    async fn kinds_for(
        &self,
        post_ids: &[Snowflake],
        user_id: Snowflake,
    ) -> RepoResult<HashMap<Snowflake, ReactionKind>>;
}

// ============================================================================
// Chat Message Repository
// ============================================================================

#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    /// List global chat messages, newest first, honoring the cursor
    async fn list(&self, query: &CursorQuery) -> RepoResult<Vec<ChatMessage>>;

    /// Append a message to the global chat
    async fn create(&self, message: &ChatMessage) -> RepoResult<()>;
}

// ============================================================================
// Gaming Profile Repository
// ============================================================================

#[async_trait]
pub trait GamingProfileRepository: Send + Sync {
    /// List a user's gaming profiles, ordered by platform
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<GamingProfile>>;

    /// Apply a set of profile changes for one user atomically
    ///
    /// Inserts are fully built entities (the caller assigns IDs), updates are
    /// (profile id, new handle) pairs, deletes are profile IDs. All writes
    /// commit in a single transaction so a concurrent reader never observes a
    /// partially replaced set.
    async fn apply_changes(
        &self,
        user_id: Snowflake,
        inserts: &[GamingProfile],
        updates: &[(Snowflake, String)],
        deletes: &[Snowflake],
    ) -> RepoResult<()>;
}
