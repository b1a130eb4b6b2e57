//! Gaming profile entity <-> model mapper

use arena_core::entities::GamingProfile;
use arena_core::value_objects::Snowflake;

use crate::models::GamingProfileModel;

impl From<GamingProfileModel> for GamingProfile {
    fn from(model: GamingProfileModel) -> Self {
        GamingProfile {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            platform: model.platform,
            handle: model.handle,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
