//! Entity to model mappers
//!
//! Conversions between domain entities (arena-core) and database models.
//! `From<Model> for Entity` converts rows to domain objects; the reaction
//! mapper is fallible because `kind` is stored as text.

mod chat_message;
mod comment;
mod gaming_profile;
mod post;
mod reaction;
mod user;
