//! Serenity-backed implementation of [`DiscordGateway`].

use serenity::{
    all::{ChannelId, CreateAttachment, EditMessage, EditRole, GuildId, MessageId, RoleId, UserId},
    http::{Http, HttpError},
};
use std::sync::Arc;

use crate::{
    discord::{message, DiscordGateway, GuildSnapshot, MemberRoles, ReviewPost, RoleSnapshot},
    error::AppError,
    model::role::{RoleAttributes, RoleColor},
};

/// Maximum members returned by a single member list request.
const MEMBERS_PER_REQUEST: u64 = 1000;

/// Gateway issuing REST calls through serenity's HTTP client.
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    /// Creates a new gateway around a shared HTTP client.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client, shared with the gateway client
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[serenity::async_trait]
impl DiscordGateway for SerenityGateway {
    async fn guild_snapshot(&self, guild_id: u64) -> Result<GuildSnapshot, AppError> {
        let guild = GuildId::new(guild_id).to_partial_guild(&self.http).await?;

        Ok(GuildSnapshot {
            guild_id,
            boost_count: guild.premium_subscription_count.unwrap_or(0),
            roles: guild.roles.values().map(RoleSnapshot::from).collect(),
        })
    }

    async fn guild_member_roles(&self, guild_id: u64) -> Result<Vec<MemberRoles>, AppError> {
        let mut members = Vec::new();
        let mut after: Option<u64> = None;

        // Requires the GUILD_MEMBERS privileged intent
        loop {
            let page = self
                .http
                .get_guild_members(guild_id.into(), Some(MEMBERS_PER_REQUEST), after)
                .await?;

            if page.is_empty() {
                break;
            }

            after = page.last().map(|m| m.user.id.get());
            let fetched_count = page.len();

            members.extend(page.into_iter().map(|m| MemberRoles {
                user_id: m.user.id.get(),
                roles: m.roles.iter().map(|role| role.get()).collect(),
            }));

            if fetched_count < MEMBERS_PER_REQUEST as usize {
                break;
            }
        }

        tracing::debug!(
            "Fetched {} members from Discord API for guild {}",
            members.len(),
            guild_id
        );

        Ok(members)
    }

    async fn create_role(
        &self,
        guild_id: u64,
        attributes: &RoleAttributes,
        position: Option<u16>,
    ) -> Result<u64, AppError> {
        let guild_id = GuildId::new(guild_id);
        let role = guild_id
            .create_role(
                &self.http,
                EditRole::new()
                    .name(&attributes.name)
                    .colour(attributes.color.value())
                    .hoist(false)
                    .mentionable(false),
            )
            .await?;

        if let Some(position) = position {
            guild_id
                .edit_role_position(&self.http, role.id, position)
                .await?;
        }

        Ok(role.id.get())
    }

    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        name: &str,
        color: RoleColor,
    ) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .edit_role(
                &self.http,
                RoleId::new(role_id),
                EditRole::new().name(name).colour(color.value()),
            )
            .await?;

        Ok(())
    }

    async fn set_role_icon(
        &self,
        guild_id: u64,
        role_id: u64,
        icon: Option<&str>,
    ) -> Result<(), AppError> {
        let attachment = match icon {
            Some(url) => Some(CreateAttachment::url(&self.http, url).await?),
            None => None,
        };

        GuildId::new(guild_id)
            .edit_role(
                &self.http,
                RoleId::new(role_id),
                EditRole::new().icon(attachment.as_ref()),
            )
            .await?;

        Ok(())
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .delete_role(&self.http, RoleId::new(role_id))
            .await?;

        Ok(())
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Custom booster role"),
            )
            .await?;

        Ok(())
    }

    async fn post_review(&self, channel_id: u64, post: &ReviewPost) -> Result<u64, AppError> {
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, message::review_message(post))
            .await?;

        Ok(message.id.get())
    }

    async fn close_review(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new()
                    .content(content)
                    .embeds(Vec::new())
                    .components(Vec::new()),
            )
            .await?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .delete_message(&self.http, MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        match ChannelId::new(channel_id)
            .message(&self.http, MessageId::new(message_id))
            .await
        {
            Ok(_) => Ok(true),
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 404 =>
            {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn icon_size(&self, url: &str) -> Result<usize, AppError> {
        let attachment = CreateAttachment::url(&self.http, url).await?;

        Ok(attachment.data.len())
    }
}
