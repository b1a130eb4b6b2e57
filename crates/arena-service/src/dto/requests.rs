//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Update current user's profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: Option<String>,

    /// Avatar URL or null to remove
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    /// URL into the object store, produced by the upload flow
    #[validate(url(message = "Image must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Update post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Reaction reconciliation request
///
/// `kind` is kept as a raw string here; the service parses it so an unknown
/// value surfaces as a domain validation error rather than a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactRequest {
    pub kind: String,
}

// ============================================================================
// Chat Requests
// ============================================================================

/// Send chat message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChatMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Gaming Profile Requests
// ============================================================================

/// One platform/handle pair in a profile replacement
///
/// `Serialize` is required by the derived `length` check on
/// `ReplaceProfilesRequest::profiles`, which embeds the offending value in
/// the validation error parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileEntry {
    #[validate(length(min = 1, max = 32, message = "Platform must be 1-32 characters"))]
    pub platform: String,

    #[validate(length(min = 1, max = 64, message = "Handle must be 1-64 characters"))]
    pub handle: String,
}

/// Replace the full set of gaming profiles for the current user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceProfilesRequest {
    #[validate(length(max = 20, message = "At most 20 profiles"), nested)]
    pub profiles: Vec<ProfileEntry>,
}
