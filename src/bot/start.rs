use serenity::all::{ApplicationId, Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token and application id
/// - `state` - Shared state handed to every event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with [`start_bot`]
/// - `Err(AppError::DiscordErr)` - Failed to build the client
pub async fn init_bot(config: &Config, state: BotState) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .application_id(ApplicationId::new(config.discord_application_id))
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until the connection shuts down.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connecting to the gateway failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
