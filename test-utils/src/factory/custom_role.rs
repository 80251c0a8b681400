//! Custom role factory for creating test role records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test custom role records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let record = CustomRoleFactory::new(&db, guild_id, user_id)
///     .name("Explorer")
///     .color("#00CCFF")
///     .role_id(Some(777))
///     .build()
///     .await?;
/// ```
pub struct CustomRoleFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    name: String,
    color: String,
    icon: String,
    role_id: Option<String>,
}

impl<'a> CustomRoleFactory<'a> {
    /// Creates a new CustomRoleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Role {id}"` where id is auto-incremented
    /// - color: `"#000000"`
    /// - icon: empty (no icon)
    /// - role_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the booster
    pub fn new(db: &'a DatabaseConnection, guild_id: u64, user_id: u64) -> Self {
        Self {
            db,
            guild_id,
            user_id,
            name: format!("Role {}", next_id()),
            color: "#000000".to_string(),
            icon: String::new(),
            role_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored color, expected as `#RRGGBB`.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn role_id(mut self, role_id: Option<u64>) -> Self {
        self.role_id = role_id.map(|id| id.to_string());
        self
    }

    /// Builds and inserts the custom role record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::custom_role::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::custom_role::Model, DbErr> {
        entity::custom_role::ActiveModel {
            key: ActiveValue::Set(format!("{}-{}", self.guild_id, self.user_id)),
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            user_id: ActiveValue::Set(self.user_id.to_string()),
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            icon: ActiveValue::Set(self.icon),
            role_id: ActiveValue::Set(self.role_id),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a custom role record with default values.
///
/// Shorthand for `CustomRoleFactory::new(db, guild_id, user_id).build().await`.
pub async fn create_custom_role(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
) -> Result<entity::custom_role::Model, DbErr> {
    CustomRoleFactory::new(db, guild_id, user_id).build().await
}
