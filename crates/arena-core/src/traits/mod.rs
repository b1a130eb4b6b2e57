//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChatMessageRepository, CommentRepository, CursorQuery, GamingProfileRepository,
    PostRepository, ReactionRepository, RepoResult, UserRepository,
};
