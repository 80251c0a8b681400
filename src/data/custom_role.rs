//! Custom role record repository for database operations.
//!
//! Records are keyed by `{guild_id}-{user_id}`. They are written on every successful grant
//! and by `/transfer`, and removed when the booster stops boosting.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::custom_role::{role_key, CustomRole, UpsertCustomRoleParam};

/// Repository providing database operations for booster custom role records.
pub struct CustomRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomRoleRepository<'a> {
    /// Creates a new CustomRoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CustomRoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the custom role record of a member.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the booster
    ///
    /// # Returns
    /// - `Ok(Some(CustomRole))` - Record found
    /// - `Ok(None)` - Member has no record in this guild
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<CustomRole>, DbErr> {
        entity::prelude::CustomRole::find_by_id(role_key(guild_id, user_id))
            .one(self.db)
            .await?
            .map(CustomRole::from_entity)
            .transpose()
    }

    /// Inserts or replaces the custom role record of a member.
    ///
    /// Always refreshes `updated_at`. A missing icon is stored as an empty string.
    ///
    /// # Arguments
    /// - `param` - Owner, attributes and live role id to store
    ///
    /// # Returns
    /// - `Ok(CustomRole)` - The stored record
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertCustomRoleParam) -> Result<CustomRole, DbErr> {
        use entity::custom_role::Column;

        let entity = entity::prelude::CustomRole::insert(entity::custom_role::ActiveModel {
            key: ActiveValue::Set(role_key(param.guild_id, param.user_id)),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            name: ActiveValue::Set(param.attributes.name),
            color: ActiveValue::Set(param.attributes.color.to_string()),
            icon: ActiveValue::Set(param.attributes.icon.unwrap_or_default()),
            role_id: ActiveValue::Set(param.role_id.map(|id| id.to_string())),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(Column::Key)
                .update_columns([
                    Column::Name,
                    Column::Color,
                    Column::Icon,
                    Column::RoleId,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        CustomRole::from_entity(entity)
    }

    /// Deletes the custom role record of a member.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the booster
    ///
    /// # Returns
    /// - `Ok(true)` - A record was deleted
    /// - `Ok(false)` - No record existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::CustomRole::delete_by_id(role_key(guild_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
