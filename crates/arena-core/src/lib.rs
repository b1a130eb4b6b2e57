//! # arena-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! pure reconciliation logic for reactions and gaming-profile sets.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ChatMessage, Comment, GamingProfile, Post, ProfileChange, Reaction, ReactionCounts,
    ReactionDecision, ReactionKind, ReactionOutcome, User, diff_profiles,
};
pub use error::DomainError;
pub use traits::{
    ChatMessageRepository, CommentRepository, CursorQuery, GamingProfileRepository,
    PostRepository, ReactionRepository, RepoResult, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
