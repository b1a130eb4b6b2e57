//! GamingProfile entity and the profile-set diff
//!
//! A user's gaming profiles (platform + handle pairs) are replaced as a whole
//! set. Instead of delete-all-then-insert, the stored and desired sets are
//! diffed so only real changes are written and the user never observably has
//! zero profiles mid-replace.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::value_objects::Snowflake;

/// Gaming profile entity - one gamer tag on one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamingProfile {
    pub id: Snowflake,
    pub user_id: Snowflake,
    /// Platform name, e.g. "steam", "psn", "xbox"
    pub platform: String,
    /// The user's handle on that platform
    pub handle: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GamingProfile {
    /// Create a new GamingProfile
    pub fn new(id: Snowflake, user_id: Snowflake, platform: String, handle: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            platform,
            handle,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One write produced by [`diff_profiles`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChange {
    /// Platform present only in the desired set
    Insert { platform: String, handle: String },
    /// Platform present in both sets with a different handle
    Update { id: Snowflake, handle: String },
    /// Platform present only in the stored set
    Delete { id: Snowflake },
}

/// Diff the stored profile set against the desired set, keyed by platform.
///
/// Platforms only in `desired` become inserts, platforms only in `stored`
/// become deletes, and platforms in both with a changed handle become
/// updates. Unchanged rows produce no write. Callers must ensure `desired`
/// has no duplicate platforms.
pub fn diff_profiles(stored: &[GamingProfile], desired: &[(String, String)]) -> Vec<ProfileChange> {
    let stored_by_platform: HashMap<&str, &GamingProfile> = stored
        .iter()
        .map(|profile| (profile.platform.as_str(), profile))
        .collect();

    let mut changes = Vec::new();

    for (platform, handle) in desired {
        match stored_by_platform.get(platform.as_str()) {
            None => changes.push(ProfileChange::Insert {
                platform: platform.clone(),
                handle: handle.clone(),
            }),
            Some(existing) if existing.handle != *handle => changes.push(ProfileChange::Update {
                id: existing.id,
                handle: handle.clone(),
            }),
            Some(_) => {}
        }
    }

    for profile in stored {
        let keep = desired
            .iter()
            .any(|(platform, _)| *platform == profile.platform);
        if !keep {
            changes.push(ProfileChange::Delete { id: profile.id });
        }
    }

    changes
}
