//! In-process [`DiscordGateway`] used by service tests.
//!
//! Keeps a single guild in memory, applies role changes to it, and records every call so
//! tests can assert on what would have been sent to Discord.

use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard},
};

use crate::{
    discord::{DiscordGateway, GuildSnapshot, MemberRoles, ReviewPost, RoleSnapshot},
    error::AppError,
    model::role::{RoleAttributes, RoleColor},
};

/// Calls the fake can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeFailure {
    CreateRole,
    EditRole,
    SetRoleIcon,
    DeleteRole,
    PostReview,
    CloseReview,
    GetMessage,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub guild: GuildSnapshot,
    pub members: Vec<MemberRoles>,
    pub failures: HashSet<FakeFailure>,
    next_id: u64,
    pub created_roles: Vec<(RoleAttributes, Option<u16>)>,
    pub edited_roles: Vec<(u64, String, RoleColor)>,
    pub icon_updates: Vec<(u64, Option<String>)>,
    pub deleted_roles: Vec<u64>,
    pub added_member_roles: Vec<(u64, u64)>,
    /// `(channel_id, post, message_id)`
    pub posted_reviews: Vec<(u64, ReviewPost, u64)>,
    /// `(channel_id, message_id, content)`
    pub closed_reviews: Vec<(u64, u64, String)>,
    pub deleted_messages: Vec<(u64, u64)>,
    /// Messages reported as not found, besides deleted ones.
    pub missing_messages: HashSet<u64>,
    /// Downloadable icons by URL with their size in bytes.
    pub icons: HashMap<String, usize>,
}

pub struct FakeDiscord {
    state: Mutex<FakeState>,
}

impl FakeDiscord {
    /// Creates a fake serving the given guild.
    pub fn new(guild: GuildSnapshot) -> Self {
        Self {
            state: Mutex::new(FakeState {
                guild,
                next_id: 900_000,
                ..Default::default()
            }),
        }
    }

    pub fn with_members(self, members: Vec<MemberRoles>) -> Self {
        self.state().members = members;
        self
    }

    pub fn with_missing_message(self, message_id: u64) -> Self {
        self.state().missing_messages.insert(message_id);
        self
    }

    pub fn with_icon(self, url: &str, size: usize) -> Self {
        self.state().icons.insert(url.to_string(), size);
        self
    }

    pub fn failing(self, failure: FakeFailure) -> Self {
        self.state().failures.insert(failure);
        self
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }
}

impl FakeState {
    fn check(&self, failure: FakeFailure) -> Result<(), AppError> {
        if self.failures.contains(&failure) {
            return Err(serenity::Error::Other("simulated Discord failure").into());
        }
        Ok(())
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// A guild with a booster role at position 2 and the given boost count.
pub fn guild_with_booster_role(guild_id: u64, boost_count: u64) -> GuildSnapshot {
    GuildSnapshot {
        guild_id,
        boost_count,
        roles: vec![
            role(guild_id, "@everyone", 0, 0),
            role(500, "Member", 0, 1),
            RoleSnapshot {
                is_booster_role: true,
                ..role(501, "Server Booster", 0xF47FFF, 2)
            },
        ],
    }
}

pub fn role(id: u64, name: &str, color: u32, position: u16) -> RoleSnapshot {
    RoleSnapshot {
        id,
        name: name.to_string(),
        color: RoleColor(color),
        position,
        icon_url: None,
        is_booster_role: false,
    }
}

#[serenity::async_trait]
impl DiscordGateway for FakeDiscord {
    async fn guild_snapshot(&self, _guild_id: u64) -> Result<GuildSnapshot, AppError> {
        Ok(self.state().guild.clone())
    }

    async fn guild_member_roles(&self, _guild_id: u64) -> Result<Vec<MemberRoles>, AppError> {
        Ok(self.state().members.clone())
    }

    async fn create_role(
        &self,
        _guild_id: u64,
        attributes: &RoleAttributes,
        position: Option<u16>,
    ) -> Result<u64, AppError> {
        let mut state = self.state();
        state.check(FakeFailure::CreateRole)?;

        let id = state.next_id();
        state.guild.roles.push(RoleSnapshot {
            id,
            name: attributes.name.clone(),
            color: attributes.color,
            position: position.unwrap_or(1),
            icon_url: None,
            is_booster_role: false,
        });
        state.created_roles.push((attributes.clone(), position));

        Ok(id)
    }

    async fn edit_role(
        &self,
        _guild_id: u64,
        role_id: u64,
        name: &str,
        color: RoleColor,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        state.check(FakeFailure::EditRole)?;

        if let Some(role) = state.guild.roles.iter_mut().find(|role| role.id == role_id) {
            role.name = name.to_string();
            role.color = color;
        }
        state.edited_roles.push((role_id, name.to_string(), color));

        Ok(())
    }

    async fn set_role_icon(
        &self,
        _guild_id: u64,
        role_id: u64,
        icon: Option<&str>,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        state.check(FakeFailure::SetRoleIcon)?;

        state.icon_updates.push((role_id, icon.map(str::to_string)));

        Ok(())
    }

    async fn delete_role(&self, _guild_id: u64, role_id: u64) -> Result<(), AppError> {
        let mut state = self.state();
        state.check(FakeFailure::DeleteRole)?;

        state.guild.roles.retain(|role| role.id != role_id);
        state.deleted_roles.push(role_id);

        Ok(())
    }

    async fn add_member_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.state().added_member_roles.push((user_id, role_id));

        Ok(())
    }

    async fn post_review(&self, channel_id: u64, post: &ReviewPost) -> Result<u64, AppError> {
        let mut state = self.state();
        state.check(FakeFailure::PostReview)?;

        let message_id = state.next_id();
        state
            .posted_reviews
            .push((channel_id, post.clone(), message_id));

        Ok(message_id)
    }

    async fn close_review(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        state.check(FakeFailure::CloseReview)?;

        state
            .closed_reviews
            .push((channel_id, message_id, content.to_string()));

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        self.state().deleted_messages.push((channel_id, message_id));

        Ok(())
    }

    async fn message_exists(&self, _channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        let state = self.state();
        state.check(FakeFailure::GetMessage)?;

        let deleted = state
            .deleted_messages
            .iter()
            .any(|(_, deleted)| *deleted == message_id);

        Ok(!deleted && !state.missing_messages.contains(&message_id))
    }

    async fn icon_size(&self, url: &str) -> Result<usize, AppError> {
        self.state()
            .icons
            .get(url)
            .copied()
            .ok_or_else(|| serenity::Error::Other("icon could not be downloaded").into())
    }
}
