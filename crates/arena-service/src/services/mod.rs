//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod chat;
pub mod comment;
pub mod context;
pub mod error;
pub mod gaming_profile;
pub mod post;
pub mod reaction;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use chat::ChatService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use gaming_profile::GamingProfileService;
pub use post::PostService;
pub use reaction::ReactionService;
pub use user::UserService;
