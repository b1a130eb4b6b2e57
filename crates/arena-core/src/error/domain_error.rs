//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Gaming profile not found: {0}")]
    GamingProfileNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction kind: {0}")]
    InvalidReactionKind(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Duplicate platform in profile set: {0}")]
    DuplicatePlatform(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the post author")]
    NotPostAuthor,

    #[error("Not the comment author")]
    NotCommentAuthor,

    #[error("Not the profile owner")]
    NotProfileOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    #[error("Platform already linked: {0}")]
    PlatformAlreadyLinked(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::GamingProfileNotFound(_) => "UNKNOWN_GAMING_PROFILE",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::DuplicatePlatform(_) => "DUPLICATE_PLATFORM",

            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotProfileOwner => "NOT_PROFILE_OWNER",

            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",
            Self::PlatformAlreadyLinked(_) => "PLATFORM_ALREADY_LINKED",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::GamingProfileNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionKind(_)
                | Self::ContentTooLong { .. }
                | Self::DuplicatePlatform(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotPostAuthor | Self::NotCommentAuthor | Self::NotProfileOwner
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ReactionAlreadyExists | Self::PlatformAlreadyLinked(_)
        )
    }
}
