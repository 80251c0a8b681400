//! Legacy booster role mapping repository.
//!
//! Older versions of the bot only stored `{guild_id}-{user_id}` → role id. These rows are read
//! as a fallback when a custom role record has no role id, and removed once the mapping has
//! been folded into the record or the booster stops boosting.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::{model::custom_role::role_key, util::parse::parse_id};

pub struct BoosterRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoosterRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the legacy role id mapped to a member.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Mapping found
    /// - `Ok(None)` - No legacy mapping for this member
    /// - `Err(DbErr)` - Database error or unparsable role id
    pub async fn find_role_id(&self, guild_id: u64, user_id: u64) -> Result<Option<u64>, DbErr> {
        entity::prelude::BoosterRole::find_by_id(role_key(guild_id, user_id))
            .one(self.db)
            .await?
            .map(|row| parse_id("role_id", &row.role_id))
            .transpose()
    }

    /// Deletes the legacy mapping of a member, returning whether a row existed.
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::BoosterRole::delete_by_id(role_key(guild_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
