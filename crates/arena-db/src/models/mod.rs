//! Database models - SQLx-compatible structs for PostgreSQL tables

mod chat_message;
mod comment;
mod gaming_profile;
mod post;
mod reaction;
mod user;

pub use chat_message::ChatMessageModel;
pub use comment::CommentModel;
pub use gaming_profile::GamingProfileModel;
pub use post::PostModel;
pub use reaction::{PostReactionCountsModel, ReactionCountsModel, ReactionModel};
pub use user::UserModel;
