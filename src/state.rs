//! State shared by every event handler.
//!
//! `BotState` is built once at startup and handed to the serenity event handler. Every field
//! is cheap to clone: the database connection is a pool, and the Discord gateway, in-flight
//! set and cleanup scheduler are reference counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    config::Config, discord::DiscordGateway, scheduler::message_cleanup::MessageCleanupScheduler,
    service::review::in_flight::InFlightRequests,
};

#[derive(Clone)]
pub struct BotState {
    /// Database connection pool for settings, role records and pending reviews.
    pub db: DatabaseConnection,

    pub config: Arc<Config>,

    /// REST operations on roles, members and review messages.
    pub discord: Arc<dyn DiscordGateway>,

    /// Members with a review awaiting a decision.
    pub in_flight: InFlightRequests,

    /// Delayed deletion of resolved review messages.
    pub cleanup: MessageCleanupScheduler,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        config: Arc<Config>,
        discord: Arc<dyn DiscordGateway>,
        in_flight: InFlightRequests,
        cleanup: MessageCleanupScheduler,
    ) -> Self {
        Self {
            db,
            config,
            discord,
            in_flight,
            cleanup,
        }
    }
}
