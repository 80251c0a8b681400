use serenity::all::{ChannelId, Context, GuildId, MessageId};

use crate::{service::review::ReviewService, state::BotState};

/// Handles the message_delete event.
///
/// A deleted review message discards its pending request and cancels its scheduled
/// cleanup. Deletions of any other message are a no-op.
pub async fn handle_message_delete(
    state: &BotState,
    _ctx: Context,
    _channel_id: ChannelId,
    message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    if guild_id.is_none() {
        return;
    }

    let service = ReviewService::new(
        &state.db,
        state.discord.as_ref(),
        &state.in_flight,
        &state.cleanup,
        state.config.icon_boost_requirement,
    );
    if let Err(e) = service.discard(message_id.get()).await {
        tracing::error!(
            "Failed to discard review for deleted message {}: {}",
            message_id,
            e
        );
    }
}
