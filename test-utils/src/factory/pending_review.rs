//! Pending review factory for creating test review rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pending reviews with customizable fields.
///
/// The payload defaults to a role change for a role named `"Reviewed Role"` colored
/// `#00CCFF` without an icon, requested by the factory's requester.
///
/// # Example
///
/// ```rust,ignore
/// let review = PendingReviewFactory::new(&db)
///     .guild_id(1)
///     .requester_id(2)
///     .payload(r#"{"name":"x"}"#)
///     .build()
///     .await?;
/// ```
pub struct PendingReviewFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: u64,
    kind: i32,
    payload: Option<String>,
    guild_id: u64,
    channel_id: u64,
    requester_id: u64,
}

impl<'a> PendingReviewFactory<'a> {
    /// Creates a new PendingReviewFactory with unique ids.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            message_id: next_id(),
            kind: 0,
            payload: None,
            guild_id: next_id(),
            channel_id: next_id(),
            requester_id: next_id(),
        }
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn kind(mut self, kind: i32) -> Self {
        self.kind = kind;
        self
    }

    /// Overrides the raw JSON payload.
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn requester_id(mut self, requester_id: u64) -> Self {
        self.requester_id = requester_id;
        self
    }

    /// Builds and inserts the pending review into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pending_review::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pending_review::Model, DbErr> {
        let payload = self.payload.unwrap_or_else(|| {
            serde_json::json!({
                "name": "Reviewed Role",
                "color": "#00CCFF",
                "icon": null,
                "requester_id": self.requester_id,
            })
            .to_string()
        });

        entity::pending_review::ActiveModel {
            message_id: ActiveValue::Set(self.message_id.to_string()),
            kind: ActiveValue::Set(self.kind),
            payload: ActiveValue::Set(payload),
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            channel_id: ActiveValue::Set(self.channel_id.to_string()),
            requester_id: ActiveValue::Set(self.requester_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending role change review for a requester in a guild.
///
/// Shorthand for the factory with `guild_id` and `requester_id` set.
pub async fn create_pending_review(
    db: &DatabaseConnection,
    guild_id: u64,
    requester_id: u64,
) -> Result<entity::pending_review::Model, DbErr> {
    PendingReviewFactory::new(db)
        .guild_id(guild_id)
        .requester_id(requester_id)
        .build()
        .await
}
