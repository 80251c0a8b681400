//! `/transfer` import of booster roles created before the bot managed them.
//!
//! Every role between a start and an end role is assigned to the first member holding it,
//! and a custom role record is written so the bot manages the role from then on.

use sea_orm::DatabaseConnection;

use crate::{
    data::{booster_role::BoosterRoleRepository, custom_role::CustomRoleRepository},
    discord::{DiscordGateway, RoleSnapshot},
    error::{request::RequestError, AppError},
    model::{custom_role::UpsertCustomRoleParam, role::RoleAttributes},
};

/// Counts reported back after a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferSummary {
    /// Roles assigned to an owner.
    pub transferred: usize,
    /// Roles nobody holds.
    pub empty: usize,
}

/// Selects the roles to transfer, highest first.
///
/// Candidates are the roles positioned strictly between `end` and `start`; `inclusive`
/// widens the range by one position on each side so the boundary roles are included. The
/// `@everyone` role, whose id equals the guild id, is never a candidate.
///
/// # Returns
/// - `Ok(Vec<&RoleSnapshot>)` - Roles to transfer
/// - `Err(RequestError::StartBelowEnd)` - `start` is positioned below `end`
/// - `Err(RequestError::NoRolesInRange)` - No role falls inside the range
pub fn plan<'r>(
    guild_id: u64,
    roles: &'r [RoleSnapshot],
    start: &RoleSnapshot,
    end: &RoleSnapshot,
    inclusive: bool,
) -> Result<Vec<&'r RoleSnapshot>, RequestError> {
    if start.position < end.position {
        return Err(RequestError::StartBelowEnd);
    }

    let widen = i32::from(inclusive);
    let max = i32::from(start.position) + widen;
    let min = i32::from(end.position) - widen;

    let mut candidates: Vec<&RoleSnapshot> = roles
        .iter()
        .filter(|role| role.id != guild_id)
        .filter(|role| {
            let position = i32::from(role.position);
            position > min && position < max
        })
        .collect();

    if candidates.is_empty() {
        return Err(RequestError::NoRolesInRange);
    }

    candidates.sort_by(|a, b| b.position.cmp(&a.position));

    Ok(candidates)
}

pub struct TransferService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordGateway,
}

impl<'a> TransferService<'a> {
    pub fn new(db: &'a DatabaseConnection, discord: &'a dyn DiscordGateway) -> Self {
        Self { db, discord }
    }

    /// Transfers every role in the range to its first holder.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `start_role_id` - Top role of the range
    /// - `end_role_id` - Bottom role of the range
    /// - `inclusive` - Whether the start and end roles are transferred too
    ///
    /// # Returns
    /// - `Ok(TransferSummary)` - Transferred and empty role counts
    /// - `Err(RequestError)` - Unknown role, inverted range or empty range
    /// - `Err(AppError::DiscordErr)` - Failed to fetch roles or members
    /// - `Err(AppError::DbErr)` - Failed to write a role record
    pub async fn transfer(
        &self,
        guild_id: u64,
        start_role_id: u64,
        end_role_id: u64,
        inclusive: bool,
    ) -> Result<TransferSummary, AppError> {
        let guild = self.discord.guild_snapshot(guild_id).await?;
        let start = guild.role(start_role_id).ok_or(RequestError::UnknownRole)?;
        let end = guild.role(end_role_id).ok_or(RequestError::UnknownRole)?;

        let candidates = plan(guild_id, &guild.roles, start, end, inclusive)?;

        tracing::info!(
            "Beginning transfer of {} roles for guild {}",
            candidates.len(),
            guild_id
        );

        let members = self.discord.guild_member_roles(guild_id).await?;
        let role_repo = CustomRoleRepository::new(self.db);
        let legacy_repo = BoosterRoleRepository::new(self.db);
        let mut summary = TransferSummary::default();

        for role in candidates {
            let Some(owner) = members.iter().find(|member| member.roles.contains(&role.id)) else {
                tracing::debug!("Skipping role {} ({}): no members", role.name, role.id);
                summary.empty += 1;
                continue;
            };

            role_repo
                .upsert(UpsertCustomRoleParam {
                    guild_id,
                    user_id: owner.user_id,
                    attributes: RoleAttributes {
                        name: role.name.clone(),
                        color: role.color,
                        icon: role.icon_url.clone(),
                    },
                    role_id: Some(role.id),
                })
                .await?;
            legacy_repo.delete(guild_id, owner.user_id).await?;

            tracing::debug!(
                "Transferred role {} ({}) to user {}",
                role.name,
                role.id,
                owner.user_id
            );
            summary.transferred += 1;
        }

        tracing::info!(
            "Transferred {} roles with {} empty roles for guild {}",
            summary.transferred,
            summary.empty,
            guild_id
        );

        Ok(summary)
    }
}
