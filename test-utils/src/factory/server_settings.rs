//! Server settings factory for creating test settings rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test server settings with customizable fields.
///
/// Defaults match the bot's own defaults: every mode `0` (always allow), alphanumeric off,
/// placeholder option maps and no review channel.
///
/// # Example
///
/// ```rust,ignore
/// let settings = ServerSettingsFactory::new(&db, 123)
///     .name_setting(2)
///     .approval_channel("456")
///     .build()
///     .await?;
/// ```
pub struct ServerSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name_setting: i32,
    icon_setting: i32,
    color_setting: i32,
    alphanumeric_only: bool,
    name_options: String,
    icon_options: String,
    color_options: String,
    approval_channel: String,
}

impl<'a> ServerSettingsFactory<'a> {
    /// Creates a new ServerSettingsFactory with default values for the given guild.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `guild_id` - Discord guild ID the settings belong to
    ///
    /// # Returns
    /// - `ServerSettingsFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            name_setting: 0,
            icon_setting: 0,
            color_setting: 0,
            alphanumeric_only: false,
            name_options: r#"{"Default":"Personal Role"}"#.to_string(),
            icon_options: r#"{"None":"NONE"}"#.to_string(),
            color_options: r##"{"None":"#000000"}"##.to_string(),
            approval_channel: String::new(),
        }
    }

    pub fn name_setting(mut self, mode: i32) -> Self {
        self.name_setting = mode;
        self
    }

    pub fn icon_setting(mut self, mode: i32) -> Self {
        self.icon_setting = mode;
        self
    }

    pub fn color_setting(mut self, mode: i32) -> Self {
        self.color_setting = mode;
        self
    }

    pub fn alphanumeric_only(mut self, enabled: bool) -> Self {
        self.alphanumeric_only = enabled;
        self
    }

    /// Sets the name options as a raw JSON object string.
    pub fn name_options(mut self, json: impl Into<String>) -> Self {
        self.name_options = json.into();
        self
    }

    /// Sets the icon options as a raw JSON object string.
    pub fn icon_options(mut self, json: impl Into<String>) -> Self {
        self.icon_options = json.into();
        self
    }

    /// Sets the color options as a raw JSON object string.
    pub fn color_options(mut self, json: impl Into<String>) -> Self {
        self.color_options = json.into();
        self
    }

    pub fn approval_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.approval_channel = channel_id.into();
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server_settings::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_settings::Model, DbErr> {
        entity::server_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name_setting: ActiveValue::Set(self.name_setting),
            icon_setting: ActiveValue::Set(self.icon_setting),
            color_setting: ActiveValue::Set(self.color_setting),
            alphanumeric_only: ActiveValue::Set(self.alphanumeric_only),
            name_options: ActiveValue::Set(self.name_options),
            icon_options: ActiveValue::Set(self.icon_options),
            color_options: ActiveValue::Set(self.color_options),
            approval_channel: ActiveValue::Set(self.approval_channel),
        }
        .insert(self.db)
        .await
    }
}

/// Creates default server settings for a guild.
///
/// Shorthand for `ServerSettingsFactory::new(db, guild_id).build().await`.
pub async fn create_server_settings(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::server_settings::Model, DbErr> {
    ServerSettingsFactory::new(db, guild_id).build().await
}
