//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use arena_core::entities::{
    ChatMessage, Comment, GamingProfile, Post, ReactionCounts, ReactionKind, User,
};

use super::responses::{
    ChatMessageResponse, CommentResponse, GamingProfileResponse, PostResponse,
    ReactionCountsResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            avatar_url: user.avatar_url.clone(),
            bio: user.bio.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

/// Post joined with its tallies and the viewer's own reaction
#[derive(Debug)]
pub struct PostWithReactions {
    pub post: Post,
    pub counts: ReactionCounts,
    pub my_reaction: Option<ReactionKind>,
}

impl From<&PostWithReactions> for PostResponse {
    fn from(p: &PostWithReactions) -> Self {
        Self {
            id: p.post.id.to_string(),
            author_id: p.post.author_id.to_string(),
            title: p.post.title.clone(),
            content: p.post.content.clone(),
            image_url: p.post.image_url.clone(),
            likes: p.counts.likes,
            dislikes: p.counts.dislikes,
            my_reaction: p.my_reaction,
            created_at: p.post.created_at,
            updated_at: p.post.updated_at,
        }
    }
}

impl From<PostWithReactions> for PostResponse {
    fn from(p: PostWithReactions) -> Self {
        Self::from(&p)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<ReactionCounts> for ReactionCountsResponse {
    fn from(counts: ReactionCounts) -> Self {
        Self {
            likes: counts.likes,
            dislikes: counts.dislikes,
        }
    }
}

// ============================================================================
// Chat Mappers
// ============================================================================

impl From<&ChatMessage> for ChatMessageResponse {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.to_string(),
            author_id: message.author_id.to_string(),
            content: message.content.clone(),
            created_at: message.created_at,
        }
    }
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Gaming Profile Mappers
// ============================================================================

impl From<&GamingProfile> for GamingProfileResponse {
    fn from(profile: &GamingProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            platform: profile.platform.clone(),
            handle: profile.handle.clone(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<GamingProfile> for GamingProfileResponse {
    fn from(profile: GamingProfile) -> Self {
        Self::from(&profile)
    }
}
