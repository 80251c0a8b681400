//! Custom role record domain models.
//!
//! A custom role record remembers the last approved name, color and icon of a booster's
//! personal role together with the id of the live Discord role, so the role can be edited in
//! place or recreated when the booster returns.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::role::{RoleAttributes, RoleColor},
    util::parse::parse_id,
};

/// Builds the `{guild_id}-{user_id}` key shared by the custom role and legacy mapping tables.
pub fn role_key(guild_id: u64, user_id: u64) -> String {
    format!("{}-{}", guild_id, user_id)
}

/// A booster's personal role record.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomRole {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Discord user ID of the booster who owns the role.
    pub user_id: u64,
    /// Last approved name, color and icon.
    pub attributes: RoleAttributes,
    /// Live Discord role id; `None` when no role has been created yet.
    pub role_id: Option<u64>,
    pub updated_at: DateTime<Utc>,
}

impl CustomRole {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// An empty icon column is read as "no icon".
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(CustomRole)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse an id or the stored color
    pub fn from_entity(entity: entity::custom_role::Model) -> Result<Self, DbErr> {
        let color = entity
            .color
            .parse::<RoleColor>()
            .map_err(|_| DbErr::Custom(format!("Failed to parse color: {}", entity.color)))?;

        let role_id = entity
            .role_id
            .as_deref()
            .map(|id| parse_id("role_id", id))
            .transpose()?;

        Ok(Self {
            guild_id: parse_id("guild_id", &entity.guild_id)?,
            user_id: parse_id("user_id", &entity.user_id)?,
            attributes: RoleAttributes {
                name: entity.name,
                color,
                icon: Some(entity.icon).filter(|icon| !icon.is_empty()),
            },
            role_id,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for inserting or replacing a custom role record.
#[derive(Debug, Clone)]
pub struct UpsertCustomRoleParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub attributes: RoleAttributes,
    pub role_id: Option<u64>,
}
