//! `/settings` mutations.

use sea_orm::DatabaseConnection;

use crate::{
    data::server_settings::ServerSettingsRepository,
    error::{request::RequestError, AppError},
    model::settings::{parse_choices, Attribute, AttributeMode, ServerSettings},
};

/// A single settings change requested through `/settings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChange {
    Alphanumeric(bool),
    Mode {
        attribute: Attribute,
        mode: AttributeMode,
        /// Raw `Label=value; ...` choices replacing the attribute's options.
        choices: Option<String>,
    },
    /// Sets the review channel, or clears it with `None`.
    ReviewChannel(Option<u64>),
}

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the current settings of a guild, creating the defaults on first read.
    pub async fn get(&self, guild_id: u64) -> Result<ServerSettings, AppError> {
        Ok(ServerSettingsRepository::new(self.db)
            .get_or_create(guild_id)
            .await?)
    }

    /// Applies one change and stores the result.
    ///
    /// An attribute can only be put in review mode while a review channel is set, and the
    /// review channel cannot be cleared while any attribute still requires review.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `change` - The change to apply
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Settings as stored after the change
    /// - `Err(RequestError::ReviewChannelRequired)` - Review mode without a review channel
    /// - `Err(RequestError::ReviewStillRequired)` - Clearing the channel while it is needed
    /// - `Err(RequestError::InvalidChoices)` - Choices could not be parsed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        guild_id: u64,
        change: SettingsChange,
    ) -> Result<ServerSettings, AppError> {
        let repo = ServerSettingsRepository::new(self.db);
        let mut settings = repo.get_or_create(guild_id).await?;

        match change {
            SettingsChange::Alphanumeric(enabled) => settings.alphanumeric_only = enabled,
            SettingsChange::Mode {
                attribute,
                mode,
                choices,
            } => {
                if mode == AttributeMode::RequireReview && settings.approval_channel.is_none() {
                    return Err(RequestError::ReviewChannelRequired(attribute).into());
                }

                if let Some(choices) = choices {
                    settings.set_options(attribute, parse_choices(attribute, &choices)?);
                }
                settings.set_mode(attribute, mode);
            }
            SettingsChange::ReviewChannel(channel_id) => {
                if channel_id.is_none() {
                    if let Some(attribute) = settings.attribute_requiring_review() {
                        return Err(RequestError::ReviewStillRequired(attribute).into());
                    }
                }
                settings.approval_channel = channel_id;
            }
        }

        let saved = repo.save(&settings).await?;

        tracing::info!("Updated settings for guild {}", guild_id);

        Ok(saved)
    }
}
