//! Narrow interface over the Discord API calls the services need.
//!
//! Services talk to Discord through [`DiscordGateway`] instead of serenity's `Http` client
//! directly, and only see plain snapshot types. [`http::SerenityGateway`] is the production
//! implementation; tests use an in-process fake that records every call.

pub mod http;
pub mod message;

#[cfg(test)]
pub mod fake;

use serenity::all::Role;

use crate::{
    error::AppError,
    model::role::{RoleAttributes, RoleColor},
};

/// The parts of a guild role the services care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSnapshot {
    pub id: u64,
    pub name: String,
    pub color: RoleColor,
    /// Position in the role hierarchy, higher is more important.
    pub position: u16,
    /// CDN URL of the role icon, if one is set.
    pub icon_url: Option<String>,
    /// Whether this is the guild's managed "Server Booster" role.
    pub is_booster_role: bool,
}

impl From<&Role> for RoleSnapshot {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
            color: RoleColor(role.colour.0),
            position: role.position,
            icon_url: role.icon.as_ref().map(|hash| {
                format!(
                    "https://cdn.discordapp.com/role-icons/{}/{}.png",
                    role.id.get(),
                    hash
                )
            }),
            is_booster_role: role.tags.premium_subscriber,
        }
    }
}

/// Current roles and boost level of a guild.
#[derive(Debug, Clone, Default)]
pub struct GuildSnapshot {
    pub guild_id: u64,
    /// Number of active server boosts.
    pub boost_count: u64,
    pub roles: Vec<RoleSnapshot>,
}

impl GuildSnapshot {
    pub fn role(&self, role_id: u64) -> Option<&RoleSnapshot> {
        self.roles.iter().find(|role| role.id == role_id)
    }

    /// The guild's "Server Booster" role, if the guild has one.
    pub fn booster_role(&self) -> Option<&RoleSnapshot> {
        self.roles.iter().find(|role| role.is_booster_role)
    }
}

/// A guild member and the roles they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRoles {
    pub user_id: u64,
    pub roles: Vec<u64>,
}

/// Contents of a review message posted to a guild's review channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPost {
    pub requester_id: u64,
    /// Name the role will get, omitted from the embed when empty.
    pub name: Option<String>,
    pub color: RoleColor,
    /// Requested icon URL, shown as the embed image.
    pub icon: Option<String>,
}

/// Discord operations used by the role services.
///
/// Every method maps onto one or a few REST calls. Errors are returned as
/// [`AppError::DiscordErr`] so callers can report the raw Discord error text.
#[serenity::async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Fetches the roles and boost count of a guild.
    async fn guild_snapshot(&self, guild_id: u64) -> Result<GuildSnapshot, AppError>;

    /// Lists every member of a guild with their role ids.
    async fn guild_member_roles(&self, guild_id: u64) -> Result<Vec<MemberRoles>, AppError>;

    /// Creates a role that is neither hoisted nor mentionable and returns its id.
    ///
    /// The icon of `attributes` is ignored; icons are set separately through
    /// [`DiscordGateway::set_role_icon`].
    async fn create_role(
        &self,
        guild_id: u64,
        attributes: &RoleAttributes,
        position: Option<u16>,
    ) -> Result<u64, AppError>;

    /// Updates the name and color of an existing role.
    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        name: &str,
        color: RoleColor,
    ) -> Result<(), AppError>;

    /// Sets the icon of a role from a URL, or removes it when `icon` is `None`.
    async fn set_role_icon(
        &self,
        guild_id: u64,
        role_id: u64,
        icon: Option<&str>,
    ) -> Result<(), AppError>;

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError>;

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    /// Posts a review message with approve and deny buttons, returning the message id.
    async fn post_review(&self, channel_id: u64, post: &ReviewPost) -> Result<u64, AppError>;

    /// Replaces a review message with plain text and removes its embed and buttons.
    async fn close_review(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;

    /// Checks whether a message still exists.
    ///
    /// # Returns
    /// - `Ok(false)` - Discord reports the message as not found
    /// - `Err(AppError::DiscordErr)` - Any other failure, the message may still exist
    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError>;

    /// Downloads an icon and returns its size in bytes.
    async fn icon_size(&self, url: &str) -> Result<usize, AppError>;
}
