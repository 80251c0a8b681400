//! Reactions to members starting or stopping boosting.

use sea_orm::DatabaseConnection;

use crate::{
    data::{booster_role::BoosterRoleRepository, custom_role::CustomRoleRepository},
    discord::DiscordGateway,
    error::AppError,
    service::role_applier::RoleApplier,
};

/// Change in a member's boost status between two member updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostChange {
    Gained,
    Lost,
    Unchanged,
}

impl BoostChange {
    /// Classifies a member update from the boost status before and after it.
    ///
    /// An unknown previous status is reported as `Unchanged`; see
    /// [`BoostService::detect_change`] for members that are not cached.
    pub fn classify(was_boosting: Option<bool>, is_boosting: bool) -> Self {
        match (was_boosting, is_boosting) {
            (Some(true), false) => Self::Lost,
            (Some(false), true) => Self::Gained,
            _ => Self::Unchanged,
        }
    }
}

pub struct BoostService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordGateway,
    icon_boost_requirement: u64,
}

impl<'a> BoostService<'a> {
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

    /// Works out how a member's boost status changed.
    ///
    /// With a known previous status this is [`BoostChange::classify`]. Members missing from
    /// the cache have no previous status, so the stored records decide instead: a member who
    /// is not boosting but still has a role record or legacy mapping lost their boost, and a
    /// boosting member whose recorded role is gone from the guild gained it.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the member
    /// - `was_boosting` - Boost status before the update, `None` when not cached
    /// - `is_boosting` - Boost status after the update
    ///
    /// # Returns
    /// - `Ok(BoostChange)` - The change to handle
    /// - `Err(AppError)` - Database or Discord error while inspecting the records
    pub async fn detect_change(
        &self,
        guild_id: u64,
        user_id: u64,
        was_boosting: Option<bool>,
        is_boosting: bool,
    ) -> Result<BoostChange, AppError> {
        if was_boosting.is_some() {
            return Ok(BoostChange::classify(was_boosting, is_boosting));
        }

        let record = CustomRoleRepository::new(self.db)
            .find(guild_id, user_id)
            .await?;

        if !is_boosting {
            let has_legacy_role = BoosterRoleRepository::new(self.db)
                .find_role_id(guild_id, user_id)
                .await?
                .is_some();

            return Ok(if record.is_some() || has_legacy_role {
                BoostChange::Lost
            } else {
                BoostChange::Unchanged
            });
        }

        let Some(record) = record else {
            return Ok(BoostChange::Unchanged);
        };

        let role_is_live = match record.role_id {
            Some(role_id) => self
                .discord
                .guild_snapshot(guild_id)
                .await?
                .role(role_id)
                .is_some(),
            None => false,
        };

        Ok(if role_is_live {
            BoostChange::Unchanged
        } else {
            BoostChange::Gained
        })
    }

    /// Applies the consequences of a boost status change.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the member
    /// - `change` - How the member's boost status changed
    ///
    /// # Returns
    /// - `Ok(())` - Change handled, or nothing to do
    /// - `Err(AppError)` - Database or Discord error while handling the change
    pub async fn handle(
        &self,
        guild_id: u64,
        user_id: u64,
        change: BoostChange,
    ) -> Result<(), AppError> {
        match change {
            BoostChange::Lost => self.boost_lost(guild_id, user_id).await,
            BoostChange::Gained => self.boost_gained(guild_id, user_id).await,
            BoostChange::Unchanged => Ok(()),
        }
    }

    /// Deletes the member's role and forgets it.
    ///
    /// A failed role deletion is logged and the records are still removed.
    async fn boost_lost(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        let applier = RoleApplier::new(self.db, self.discord, self.icon_boost_requirement);

        if let Some(role_id) = applier.known_role_id(guild_id, user_id).await? {
            match self.discord.delete_role(guild_id, role_id).await {
                Ok(()) => tracing::info!(
                    "Deleted custom role {} of user {} who stopped boosting guild {}",
                    role_id,
                    user_id,
                    guild_id
                ),
                Err(e) => tracing::warn!("Failed to delete custom role {}: {}", role_id, e),
            }
        }

        CustomRoleRepository::new(self.db)
            .delete(guild_id, user_id)
            .await?;
        BoosterRoleRepository::new(self.db)
            .delete(guild_id, user_id)
            .await?;

        Ok(())
    }

    /// Restores the member's stored role, if they had one.
    async fn boost_gained(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        let Some(record) = CustomRoleRepository::new(self.db)
            .find(guild_id, user_id)
            .await?
        else {
            return Ok(());
        };

        let applied = RoleApplier::new(self.db, self.discord, self.icon_boost_requirement)
            .apply(guild_id, user_id, &record.attributes)
            .await?;

        tracing::info!(
            "Restored custom role {} for user {} in guild {}",
            applied.role_id,
            user_id,
            guild_id
        );

        Ok(())
    }
}
