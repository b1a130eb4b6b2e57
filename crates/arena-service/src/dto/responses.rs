//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use arena_core::entities::{ReactionKind, ReactionOutcome};

// ============================================================================
// User Responses
// ============================================================================

/// User profile response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response with reaction tallies
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub likes: i64,
    pub dislikes: i64,
    /// The current user's reaction, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_reaction: Option<ReactionKind>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Reaction tallies for a post
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionCountsResponse {
    pub likes: i64,
    pub dislikes: i64,
}

/// Tallies plus the viewer's own reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactionSummaryResponse {
    pub likes: i64,
    pub dislikes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_reaction: Option<ReactionKind>,
}

/// Result of one reaction reconciliation
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    /// What the reconciliation did: created, updated or removed
    pub outcome: ReactionOutcome,
    /// The reaction now stored, absent after a removal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReactionKind>,
    pub counts: ReactionCountsResponse,
}

// ============================================================================
// Chat Responses
// ============================================================================

/// Global chat message response
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Gaming Profile Responses
// ============================================================================

/// Gaming profile response
#[derive(Debug, Clone, Serialize)]
pub struct GamingProfileResponse {
    pub id: String,
    pub platform: String,
    pub handle: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness check response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn new(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
