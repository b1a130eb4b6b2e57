//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use arena_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with post_id
#[derive(Debug, serde::Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

impl PostIdPath {
    /// Parse post_id as Snowflake
    pub fn post_id(&self) -> Result<Snowflake, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}

/// Path parameters with post_id and comment_id
#[derive(Debug, serde::Deserialize)]
pub struct CommentPath {
    pub post_id: String,
    pub comment_id: String,
}

impl CommentPath {
    /// Parse post_id as Snowflake
    pub fn post_id(&self) -> Result<Snowflake, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }

    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with a username
#[derive(Debug, serde::Deserialize)]
pub struct UsernamePath {
    pub username: String,
}

impl UsernamePath {
    /// Get the username
    pub fn username(&self) -> &str {
        &self.username
    }
}
