//! Request handlers organized by domain

pub mod chat;
pub mod comments;
pub mod gaming_profiles;
pub mod health;
pub mod posts;
pub mod reactions;
pub mod users;
