use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    discord::{
        fake::{guild_with_booster_role, FakeDiscord},
        DiscordGateway, GuildSnapshot,
    },
    scheduler::message_cleanup::MessageCleanupScheduler,
    service::review::in_flight::InFlightRequests,
};

mod role_applier;

const GUILD_ID: u64 = 1000;
const USER_ID: u64 = 2000;
const MODERATOR_ID: u64 = 3000;
const REVIEW_CHANNEL_ID: u64 = 4000;
const ICON_BOOST_REQUIREMENT: u64 = 7;

/// Database, fake Discord and shared review state for one service test.
struct Harness {
    test: TestContext,
    discord: Arc<FakeDiscord>,
    in_flight: InFlightRequests,
    cleanup: MessageCleanupScheduler,
}

impl Harness {
    /// Creates a harness serving a guild with enough boosts for role icons.
    async fn new() -> Self {
        Self::with_guild(guild_with_booster_role(GUILD_ID, ICON_BOOST_REQUIREMENT)).await
    }

    async fn with_guild(guild: GuildSnapshot) -> Self {
        Self::with_discord(FakeDiscord::new(guild)).await
    }

    async fn with_discord(discord: FakeDiscord) -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let discord = Arc::new(discord);
        let gateway: Arc<dyn DiscordGateway> = discord.clone();
        // Long enough that no scheduled deletion fires while a test runs
        let cleanup = MessageCleanupScheduler::start(gateway, Duration::from_secs(600))
            .await
            .unwrap();

        Self {
            test,
            discord,
            in_flight: InFlightRequests::new(),
            cleanup,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }
}
