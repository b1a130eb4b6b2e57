//! # arena-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! Provides connection pool management, `FromRow` models, model↔entity
//! mappers, and the `Pg*` repository implementations of the traits defined
//! in `arena-core`. The `reactions` table carries the uniqueness constraint
//! on (post_id, user_id) that serializes concurrent reaction writes.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgChatMessageRepository, PgCommentRepository, PgGamingProfileRepository, PgPostRepository,
    PgReactionRepository, PgUserRepository,
};
