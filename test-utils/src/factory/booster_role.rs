//! Legacy booster role mapping factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a legacy `{guild_id}-{user_id}` → role id mapping.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID of the booster
/// - `role_id` - Discord role ID the member owned
///
/// # Returns
/// - `Ok(entity::booster_role::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booster_role(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    role_id: u64,
) -> Result<entity::booster_role::Model, DbErr> {
    entity::booster_role::ActiveModel {
        key: ActiveValue::Set(format!("{}-{}", guild_id, user_id)),
        role_id: ActiveValue::Set(role_id.to_string()),
    }
    .insert(db)
    .await
}
