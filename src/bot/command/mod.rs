//! Slash commands.
//!
//! Each command module exposes `register` building its definition and `run` producing the
//! embed to reply with. `dispatch` defers every command ephemerally before running it, so
//! slow Discord calls never exceed the interaction deadline, and always edits the deferred
//! response with either the result or the error.

pub mod customrole;
pub mod settings;
pub mod transfer;

use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse, Member};

use crate::{bot::reply, state::BotState};

/// Definitions of every slash command, registered globally on ready.
pub fn all() -> Vec<CreateCommand> {
    vec![
        customrole::register(),
        settings::register(),
        transfer::register(),
    ]
}

/// Runs a slash command and answers it.
pub async fn dispatch(ctx: &Context, state: &BotState, command: &CommandInteraction) {
    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!(
            "Failed to acknowledge /{} from user {}: {}",
            command.data.name,
            command.user.id,
            e
        );
        return;
    }

    let result = match command.data.name.as_str() {
        customrole::NAME => customrole::run(state, command).await,
        settings::NAME => settings::run(state, command).await,
        transfer::NAME => transfer::run(state, command).await,
        name => {
            tracing::warn!("Received unknown command /{}", name);
            return;
        }
    };

    let embed = match result {
        Ok(embed) => embed,
        Err(e) => reply::error(&e),
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await
    {
        tracing::error!("Failed to reply to /{}: {}", command.data.name, e);
    }
}

/// Whether the member may manage the bot: Manage Roles or Administrator.
pub fn can_manage_roles(member: Option<&Member>) -> bool {
    member
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.manage_roles() || permissions.administrator())
}
