//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in arena-core.
//! Each repository handles database operations for a specific domain entity.

mod chat_message;
mod comment;
mod error;
mod gaming_profile;
mod post;
mod reaction;
mod user;

pub use chat_message::PgChatMessageRepository;
pub use comment::PgCommentRepository;
pub use gaming_profile::PgGamingProfileRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
