use serenity::all::{Context, GuildMemberUpdateEvent, Member};

use crate::{
    service::boost::{BoostChange, BoostService},
    state::BotState,
};

/// Handles the guild_member_update event, reacting to boost status changes.
///
/// The previous state comes from the cache; when the member is not cached the stored role
/// records decide whether the boost was gained or lost.
pub async fn handle_guild_member_update(
    state: &BotState,
    _ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let guild_id = event.guild_id.get();
    let user_id = event.user.id.get();

    let service = BoostService::new(
        &state.db,
        state.discord.as_ref(),
        state.config.icon_boost_requirement,
    );

    let change = match service
        .detect_change(
            guild_id,
            user_id,
            old.map(|member| member.premium_since.is_some()),
            event.premium_since.is_some(),
        )
        .await
    {
        Ok(change) => change,
        Err(e) => {
            tracing::error!(
                "Failed to check boost status of user {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
            return;
        }
    };
    if change == BoostChange::Unchanged {
        return;
    }

    tracing::info!(
        "User {} boost status changed in guild {}: {:?}",
        user_id,
        guild_id,
        change
    );

    if let Err(e) = service.handle(guild_id, user_id, change).await {
        tracing::error!(
            "Failed to handle boost change of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}
