//! `/customrole` orchestration.
//!
//! Validates the request, fills in attributes the member left out from their current role,
//! runs the policy checker and then either applies the change, rejects it, or submits it for
//! review.

use sea_orm::DatabaseConnection;

use crate::{
    data::{custom_role::CustomRoleRepository, server_settings::ServerSettingsRepository},
    discord::DiscordGateway,
    error::{request::RequestError, AppError},
    model::role::{RoleAttributes, RoleColor},
    scheduler::message_cleanup::MessageCleanupScheduler,
    service::{
        policy::{self, PolicyDecision, PolicyRequest},
        review::{in_flight::InFlightRequests, ReviewRequest, ReviewService},
        role_applier::RoleApplier,
    },
};

/// Largest role icon accepted, in bytes.
pub const MAX_ICON_BYTES: usize = 2_048_000;

/// A member's `/customrole` invocation.
#[derive(Debug, Clone, Default)]
pub struct RoleRequest {
    pub guild_id: u64,
    pub user_id: u64,
    /// Whether the member is currently boosting the guild.
    pub is_booster: bool,
    pub name: Option<String>,
    /// Raw color option, expected as `#RRGGBB`.
    pub color: Option<String>,
    /// Icon URL, or `none` in any case to remove the icon.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequestOutcome {
    /// No options were given; shows the member's current role.
    Current {
        role_id: u64,
        color: RoleColor,
        icon: Option<String>,
    },
    /// The change was applied without review.
    Applied { role_id: u64, created: bool },
    /// The change was sent for review. `updating` is set when the member already has a role.
    Submitted { updating: bool },
}

pub struct RoleRequestService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordGateway,
    in_flight: &'a InFlightRequests,
    cleanup: &'a MessageCleanupScheduler,
    icon_boost_requirement: u64,
}

impl<'a> RoleRequestService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        discord: &'a dyn DiscordGateway,
        in_flight: &'a InFlightRequests,
        cleanup: &'a MessageCleanupScheduler,
        icon_boost_requirement: u64,
    ) -> Self {
        Self {
            db,
            discord,
            in_flight,
            cleanup,
            icon_boost_requirement,
        }
    }

    /// Handles a `/customrole` request.
    ///
    /// Checks run in this order: booster status, outstanding review, color format, then
    /// required fields for members without a role. Members with a live role may leave any
    /// option out; name and color are then taken from the live role and the icon from the
    /// stored record. A newly submitted icon is downloaded before the change is applied or
    /// sent for review, and must be at most [`MAX_ICON_BYTES`].
    ///
    /// # Arguments
    /// - `request` - The member and the options they supplied
    ///
    /// # Returns
    /// - `Ok(RoleRequestOutcome)` - Current role shown, change applied, or review submitted
    /// - `Err(AppError::RequestErr)` - Validation or policy rejection with the exact reason
    /// - `Err(AppError::DiscordErr)` - Discord call failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn request(&self, request: RoleRequest) -> Result<RoleRequestOutcome, AppError> {
        if !request.is_booster {
            return Err(RequestError::NotBooster.into());
        }

        if self
            .in_flight
            .contains(request.guild_id, request.user_id)
            .await
        {
            return Err(RequestError::AlreadyPending.into());
        }

        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let color = request
            .color
            .as_deref()
            .map(str::parse::<RoleColor>)
            .transpose()?;
        let remove_icon = request
            .icon
            .as_deref()
            .is_some_and(|icon| icon.trim().eq_ignore_ascii_case("none"));
        let icon = request
            .icon
            .as_deref()
            .map(str::trim)
            .filter(|icon| !icon.is_empty() && !remove_icon)
            .map(str::to_string);

        let applier = RoleApplier::new(self.db, self.discord, self.icon_boost_requirement);
        let known_role_id = applier
            .known_role_id(request.guild_id, request.user_id)
            .await?;
        let guild = self.discord.guild_snapshot(request.guild_id).await?;
        let live_role = known_role_id.and_then(|role_id| guild.role(role_id));

        let stored_icon = CustomRoleRepository::new(self.db)
            .find(request.guild_id, request.user_id)
            .await?
            .and_then(|record| record.attributes.icon);

        let attributes = match live_role {
            Some(role) => {
                if name.is_none() && color.is_none() && request.icon.is_none() {
                    return Ok(RoleRequestOutcome::Current {
                        role_id: role.id,
                        color: role.color,
                        icon: stored_icon.or_else(|| role.icon_url.clone()),
                    });
                }

                RoleAttributes {
                    name: name.clone().unwrap_or_else(|| role.name.clone()),
                    color: color.unwrap_or(role.color),
                    icon: if remove_icon {
                        None
                    } else {
                        icon.clone().or(stored_icon)
                    },
                }
            }
            None => RoleAttributes {
                name: name.clone().ok_or(RequestError::MissingName)?,
                color: color.ok_or(RequestError::InvalidColor)?,
                icon: icon.clone(),
            },
        };
        let updating = live_role.is_some();

        let settings = ServerSettingsRepository::new(self.db)
            .get_or_create(request.guild_id)
            .await?;

        let flags = policy::check(
            &settings,
            &PolicyRequest {
                name: &attributes.name,
                icon: attributes.icon.as_deref(),
                color: attributes.color,
                submitted_name: name.is_some(),
                submitted_icon: icon.is_some(),
                submitted_color: color.is_some(),
            },
        );

        let decision = policy::decide(&flags);
        if !matches!(decision, PolicyDecision::Reject(_)) {
            if let Some(url) = icon.as_deref() {
                self.check_icon(url).await?;
            }
        }

        match decision {
            PolicyDecision::Apply => {
                let applied = applier
                    .apply(request.guild_id, request.user_id, &attributes)
                    .await?;

                Ok(RoleRequestOutcome::Applied {
                    role_id: applied.role_id,
                    created: applied.created,
                })
            }
            PolicyDecision::Reject(flag) => Err(RequestError::Rejected(flag).into()),
            PolicyDecision::Review(flags) => {
                tracing::debug!(
                    "Role request from {} in guild {} flagged for review: {:?}",
                    request.user_id,
                    request.guild_id,
                    flags
                );

                ReviewService::new(
                    self.db,
                    self.discord,
                    self.in_flight,
                    self.cleanup,
                    self.icon_boost_requirement,
                )
                .submit(
                    &settings,
                    ReviewRequest {
                        guild_id: request.guild_id,
                        requester_id: request.user_id,
                        attributes,
                    },
                )
                .await?;

                Ok(RoleRequestOutcome::Submitted { updating })
            }
        }
    }

    /// Rejects a submitted icon that cannot be downloaded or is too large for Discord.
    async fn check_icon(&self, url: &str) -> Result<(), AppError> {
        match self.discord.icon_size(url).await {
            Ok(size) if size <= MAX_ICON_BYTES => Ok(()),
            Ok(size) => {
                tracing::debug!("Rejected icon {} of {} bytes", url, size);
                Err(RequestError::InvalidIcon.into())
            }
            Err(e) => {
                tracing::debug!("Could not download icon {}: {}", url, e);
                Err(RequestError::InvalidIcon.into())
            }
        }
    }
}
