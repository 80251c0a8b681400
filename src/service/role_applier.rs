//! Creates or updates a booster's personal role.
//!
//! The live role is found through the member's custom role record, falling back to the legacy
//! mapping written by older versions of the bot. An existing role is edited in place; a
//! missing one is recreated just above the guild's booster role and given to the member.
//! Icons are only touched when the guild has enough boosts to use role icons, and an icon
//! failure never fails the whole operation.

use sea_orm::DatabaseConnection;

use crate::{
    data::{booster_role::BoosterRoleRepository, custom_role::CustomRoleRepository},
    discord::{DiscordGateway, GuildSnapshot},
    error::AppError,
    model::{custom_role::UpsertCustomRoleParam, role::RoleAttributes},
};

/// Result of applying attributes to a member's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedRole {
    pub role_id: u64,
    /// `true` when a new role had to be created.
    pub created: bool,
}

pub struct RoleApplier<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordGateway,
    /// Minimum number of guild boosts before role icons are set.
    icon_boost_requirement: u64,
}

impl<'a> RoleApplier<'a> {
    /// Creates a new RoleApplier instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `discord` - Gateway used for role and member calls
    /// - `icon_boost_requirement` - Boost count from which role icons are set
    pub fn new(
        db: &'a DatabaseConnection,
        discord: &'a dyn DiscordGateway,
        icon_boost_requirement: u64,
    ) -> Self {
        Self {
            db,
            discord,
            icon_boost_requirement,
        }
    }

    /// Resolves the id of the member's live role, if one is known.
    ///
    /// The custom role record wins; the legacy mapping is only consulted when the record has
    /// no role id.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - Known role id, which may no longer exist in the guild
    /// - `Ok(None)` - No role id is stored for this member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn known_role_id(&self, guild_id: u64, user_id: u64) -> Result<Option<u64>, AppError> {
        let record = CustomRoleRepository::new(self.db)
            .find(guild_id, user_id)
            .await?;

        if let Some(role_id) = record.and_then(|record| record.role_id) {
            return Ok(Some(role_id));
        }

        Ok(BoosterRoleRepository::new(self.db)
            .find_role_id(guild_id, user_id)
            .await?)
    }

    /// Applies name, color and icon to the member's role, creating the role if needed.
    ///
    /// On success the custom role record holds `attributes` and the resulting role id, and
    /// any legacy mapping row for the member is gone.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the booster
    /// - `attributes` - Desired name, color and icon
    ///
    /// # Returns
    /// - `Ok(AppliedRole)` - The role that now carries the attributes
    /// - `Err(AppError::DiscordErr)` - Failed to fetch the guild or create/edit the role
    /// - `Err(AppError::DbErr)` - Failed to read or write role records
    pub async fn apply(
        &self,
        guild_id: u64,
        user_id: u64,
        attributes: &RoleAttributes,
    ) -> Result<AppliedRole, AppError> {
        let known_role_id = self.known_role_id(guild_id, user_id).await?;
        let guild = self.discord.guild_snapshot(guild_id).await?;

        let existing = known_role_id.and_then(|role_id| guild.role(role_id));

        let applied = match existing {
            Some(role) => {
                self.discord
                    .edit_role(guild_id, role.id, &attributes.name, attributes.color)
                    .await?;

                // Clear a previously set icon only when one is actually present
                if attributes.icon.is_some() || role.icon_url.is_some() {
                    self.update_icon(&guild, role.id, attributes.icon.as_deref())
                        .await;
                }

                AppliedRole {
                    role_id: role.id,
                    created: false,
                }
            }
            None => {
                let position = guild.booster_role().map(|role| role.position + 1);
                let role_id = self
                    .discord
                    .create_role(guild_id, attributes, position)
                    .await?;

                tracing::info!(
                    "Created custom role {} for user {} in guild {}",
                    role_id,
                    user_id,
                    guild_id
                );

                AppliedRole {
                    role_id,
                    created: true,
                }
            }
        };

        // Record the role id before any further call can fail
        CustomRoleRepository::new(self.db)
            .upsert(UpsertCustomRoleParam {
                guild_id,
                user_id,
                attributes: attributes.clone(),
                role_id: Some(applied.role_id),
            })
            .await?;
        BoosterRoleRepository::new(self.db)
            .delete(guild_id, user_id)
            .await?;

        if applied.created {
            self.discord
                .add_member_role(guild_id, user_id, applied.role_id)
                .await?;

            if attributes.icon.is_some() {
                self.update_icon(&guild, applied.role_id, attributes.icon.as_deref())
                    .await;
            }
        }

        Ok(applied)
    }

    /// Sets or clears a role icon, logging instead of failing on error.
    ///
    /// Skipped entirely when the guild is below the icon boost requirement.
    async fn update_icon(&self, guild: &GuildSnapshot, role_id: u64, icon: Option<&str>) {
        if guild.boost_count < self.icon_boost_requirement {
            tracing::debug!(
                "Skipping icon for role {}: guild {} has {} of {} required boosts",
                role_id,
                guild.guild_id,
                guild.boost_count,
                self.icon_boost_requirement
            );
            return;
        }

        if let Err(e) = self
            .discord
            .set_role_icon(guild.guild_id, role_id, icon)
            .await
        {
            tracing::warn!("Couldn't set icon of role {}: {}", role_id, e);
        }
    }
}
