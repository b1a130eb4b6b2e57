//! Post entity - a community post on the feed

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub content: String,
    /// URL into the external object store, set by the upload flow
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Snowflake, author_id: Snowflake, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            content,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user wrote this post
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Edit title and/or content
    pub fn edit(&mut self, title: Option<String>, content: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}
