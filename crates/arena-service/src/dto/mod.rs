//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateChatMessageRequest, CreateCommentRequest, CreatePostRequest, ProfileEntry,
    ReactRequest, ReplaceProfilesRequest, UpdatePostRequest, UpdateUserRequest,
};

// Re-export mapper helper structs
pub use mappers::PostWithReactions;

// Re-export commonly used response types
pub use responses::{
    ChatMessageResponse, CommentResponse, GamingProfileResponse, HealthResponse, PostResponse,
    ReactionCountsResponse, ReactionResponse, ReactionSummaryResponse, ReadinessResponse,
    UserResponse,
};
