//! Pending review repository for database operations.
//!
//! Each row maps a posted review message to the request waiting on it. Rows survive restarts so
//! moderators can still resolve reviews posted before the bot went down, and the in-flight
//! request set is rebuilt from them at startup.
//!
//! Resolution goes through [`PendingReviewRepository::take`], which deletes the row and reports
//! whether this caller was the one to delete it. Only that caller may act on the review.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::pending_review::{CreatePendingReviewParam, PendingReview, ReviewKind};

/// Repository providing database operations for pending reviews.
pub struct PendingReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PendingReviewRepository<'a> {
    /// Creates a new PendingReviewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PendingReviewRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a role change review keyed by its posted message id.
    ///
    /// # Arguments
    /// - `param` - Posted message location and the request payload
    ///
    /// # Returns
    /// - `Ok(PendingReview)` - The stored review
    /// - `Err(DbErr)` - Database error, including a second review for the same requester in
    ///   the same guild
    pub async fn create(&self, param: CreatePendingReviewParam) -> Result<PendingReview, DbErr> {
        let payload = serde_json::to_string(&param.payload)
            .map_err(|e| DbErr::Custom(format!("Failed to encode review payload: {}", e)))?;

        let entity = entity::prelude::PendingReview::insert(entity::pending_review::ActiveModel {
            message_id: ActiveValue::Set(param.message_id.to_string()),
            kind: ActiveValue::Set(ReviewKind::RoleChange.as_i32()),
            payload: ActiveValue::Set(payload),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            requester_id: ActiveValue::Set(param.payload.requester_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        PendingReview::from_entity(entity)
    }

    /// Finds the review posted as the given message.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID of the review post
    ///
    /// # Returns
    /// - `Ok(Some(PendingReview))` - Review is still pending
    /// - `Ok(None)` - No pending review for this message
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn find_by_message_id(&self, message_id: u64) -> Result<Option<PendingReview>, DbErr> {
        entity::prelude::PendingReview::find_by_id(message_id.to_string())
            .one(self.db)
            .await?
            .map(PendingReview::from_entity)
            .transpose()
    }

    /// Claims a pending review by deleting it.
    ///
    /// When several callers race on the same message only the one whose delete removed the row
    /// gets the review back; everyone else sees `None`.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID of the review post
    ///
    /// # Returns
    /// - `Ok(Some(PendingReview))` - This caller claimed the review
    /// - `Ok(None)` - No such review, or another caller claimed it first
    /// - `Err(DbErr)` - Database error
    pub async fn take(&self, message_id: u64) -> Result<Option<PendingReview>, DbErr> {
        let Some(review) = self.find_by_message_id(message_id).await? else {
            return Ok(None);
        };

        let claimed = self.delete(message_id).await?;

        Ok(claimed.then_some(review))
    }

    /// Gets every pending review, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<PendingReview>)` - All pending reviews
    /// - `Err(DbErr)` - Database error or corrupt row
    pub async fn get_all(&self) -> Result<Vec<PendingReview>, DbErr> {
        use sea_orm::QueryOrder;

        entity::prelude::PendingReview::find()
            .order_by_asc(entity::pending_review::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(PendingReview::from_entity)
            .collect()
    }

    /// Deletes a pending review, returning whether a row existed.
    pub async fn delete(&self, message_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::PendingReview::delete_by_id(message_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
