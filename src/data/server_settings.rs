//! Server settings repository for database operations.
//!
//! Settings rows are created lazily with their defaults on first read and replaced wholesale
//! on every `/settings` change. Rows are never deleted.

use migration::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::settings::ServerSettings;

/// Repository providing database operations for per-server settings.
pub struct ServerSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerSettingsRepository<'a> {
    /// Creates a new ServerSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the stored settings for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(ServerSettings))` - Settings row exists
    /// - `Ok(None)` - Guild has never been configured or read
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn find(&self, guild_id: u64) -> Result<Option<ServerSettings>, DbErr> {
        entity::prelude::ServerSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(ServerSettings::from_entity)
            .transpose()
    }

    /// Gets the settings for a guild, inserting the defaults if none exist yet.
    ///
    /// The insert ignores conflicts, so two handlers racing on an unconfigured guild both end
    /// up reading the same row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Stored or freshly created settings
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn get_or_create(&self, guild_id: u64) -> Result<ServerSettings, DbErr> {
        if let Some(settings) = self.find(guild_id).await? {
            return Ok(settings);
        }

        let defaults = ServerSettings::new(guild_id);
        let inserted = entity::prelude::ServerSettings::insert(defaults.to_active_model())
            .on_conflict(
                OnConflict::column(entity::server_settings::Column::GuildId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        if inserted == 1 {
            return Ok(defaults);
        }

        self.find(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("server_settings {}", guild_id)))
    }

    /// Inserts or fully replaces the settings row of a guild.
    ///
    /// # Arguments
    /// - `settings` - Complete settings to store
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Settings as read back from the store
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn save(&self, settings: &ServerSettings) -> Result<ServerSettings, DbErr> {
        use entity::server_settings::Column;

        let entity = entity::prelude::ServerSettings::insert(settings.to_active_model())
            .on_conflict(
                OnConflict::column(Column::GuildId)
                    .update_columns([
                        Column::NameSetting,
                        Column::IconSetting,
                        Column::ColorSetting,
                        Column::AlphanumericOnly,
                        Column::NameOptions,
                        Column::IconOptions,
                        Column::ColorOptions,
                        Column::ApprovalChannel,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        ServerSettings::from_entity(entity)
    }
}
