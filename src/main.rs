mod bot;
mod config;
mod data;
mod discord;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    config::Config,
    discord::{http::SerenityGateway, DiscordGateway},
    error::AppError,
    scheduler::message_cleanup::MessageCleanupScheduler,
    service::review::in_flight::InFlightRequests,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);
    let db = startup::connect_to_database(&config).await?;

    let discord: Arc<dyn DiscordGateway> =
        Arc::new(SerenityGateway::new(startup::setup_discord_http(&config)));

    let in_flight = InFlightRequests::new();
    startup::restore_in_flight(&db, discord.as_ref(), &in_flight).await?;

    let cleanup =
        MessageCleanupScheduler::start(discord.clone(), config.review_delete_delay).await?;

    let state = BotState::new(db, config.clone(), discord, in_flight, cleanup);
    let client = bot::start::init_bot(&config, state).await?;

    bot::start::start_bot(client).await
}
