//! Gaming profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the gaming_profiles table
///
/// UNIQUE on (user_id, platform).
#[derive(Debug, Clone, FromRow)]
pub struct GamingProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub platform: String,
    pub handle: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
