use serenity::all::{Context, Interaction};

use crate::{
    bot::{command, component},
    state::BotState,
};

/// Routes slash commands and button presses to their handlers.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => command::dispatch(&ctx, state, &command).await,
        Interaction::Component(component) => component::dispatch(&ctx, state, &component).await,
        _ => {}
    }
}
