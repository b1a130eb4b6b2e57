//! User entity - represents a community member

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
///
/// Accounts are provisioned by the external auth provider; this service only
/// reads and edits the profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, display_name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            display_name,
            avatar_url: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// Update the avatar URL (None removes it)
    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }

    /// Update the bio (None removes it)
    pub fn set_bio(&mut self, bio: Option<String>) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }
}
