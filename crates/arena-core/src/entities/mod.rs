//! Domain entities - core business objects

mod chat_message;
mod comment;
mod gaming_profile;
mod post;
mod reaction;
mod user;

pub use chat_message::ChatMessage;
pub use comment::Comment;
pub use gaming_profile::{diff_profiles, GamingProfile, ProfileChange};
pub use post::Post;
pub use reaction::{Reaction, ReactionCounts, ReactionDecision, ReactionKind, ReactionOutcome};
pub use user::User;
