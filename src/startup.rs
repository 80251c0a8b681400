use sea_orm::DatabaseConnection;
use serenity::{all::ApplicationId, http::Http};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config, data::pending_review::PendingReviewRepository, discord::DiscordGateway,
    error::AppError, service::review::in_flight::InFlightRequests,
};

/// Installs the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG`, falling back to `info` for this crate and `warn` for
/// everything else when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,turbo=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date before
/// the bot handles any event.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the Discord HTTP client used for REST calls outside of event handlers.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token and application id
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    let http = Http::new(&config.discord_bot_token);
    http.set_application_id(ApplicationId::new(config.discord_application_id));

    Arc::new(http)
}

/// Rebuilds the in-flight request set from the stored pending reviews.
///
/// Reviews whose message was deleted while the bot was offline are dropped, since no
/// moderator can resolve them anymore. If a message cannot be checked the review is kept and
/// its member stays blocked until a moderator resolves it.
///
/// # Arguments
/// - `db` - Database connection holding the pending reviews
/// - `discord` - Gateway used to look up the review messages
/// - `in_flight` - Set to fill with the requesters of the restored reviews
///
/// # Returns
/// - `Ok(usize)` - Number of pending reviews restored
/// - `Err(AppError::DbErr)` - Failed to read or delete pending reviews
pub async fn restore_in_flight(
    db: &DatabaseConnection,
    discord: &dyn DiscordGateway,
    in_flight: &InFlightRequests,
) -> Result<usize, AppError> {
    let repo = PendingReviewRepository::new(db);
    let mut restored = Vec::new();

    for review in repo.get_all().await? {
        match discord
            .message_exists(review.channel_id, review.message_id)
            .await
        {
            Ok(true) => restored.push(review),
            Ok(false) => {
                repo.delete(review.message_id).await?;
                tracing::info!(
                    "Dropped review {} for user {}: message no longer exists",
                    review.message_id,
                    review.requester_id
                );
            }
            Err(e) => {
                tracing::warn!("Failed to look up review message {}: {}", review.message_id, e);
                restored.push(review);
            }
        }
    }

    in_flight.hydrate(&restored).await;

    tracing::info!("Restored {} pending reviews", restored.len());

    Ok(restored.len())
}
