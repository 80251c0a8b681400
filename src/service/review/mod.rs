//! Review workflow for role changes that need a moderator's approval.
//!
//! A request enters review when the policy checker flags it for review. Submitting reserves
//! the requester's in-flight slot, posts the review message and persists the request keyed by
//! the message id. Resolving claims the stored request by deleting it, so when two moderators
//! press a button at the same time only one of them acts on it.
//!
//! ```text
//! NONE --submit--> PENDING --approve--> APPROVED
//!                          \--deny----> DENIED
//! ```
//!
//! Every resolution path releases the in-flight slot. Approved and denied messages are
//! replaced with a short note and deleted after a delay; a failed approval keeps its note so
//! moderators can see what went wrong.

pub mod in_flight;

use sea_orm::DatabaseConnection;
use serenity::all::{Mention, UserId};

use crate::{
    data::pending_review::PendingReviewRepository,
    discord::{DiscordGateway, ReviewPost},
    error::{request::RequestError, AppError},
    model::{
        pending_review::{CreatePendingReviewParam, PendingReview, RoleChangePayload},
        role::RoleAttributes,
        settings::ServerSettings,
    },
    scheduler::message_cleanup::MessageCleanupScheduler,
    service::{review::in_flight::InFlightRequests, role_applier::RoleApplier},
};

/// A moderator's decision on a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Deny,
}

/// What happened when a review button was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The requested change was applied to this role.
    Approved { role_id: u64 },
    Denied,
    /// Applying the approved change failed with this error text.
    ApplyFailed(String),
    /// No pending request is stored for the message.
    NoMatchingRequest,
}

/// A role change to be reviewed.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub guild_id: u64,
    pub requester_id: u64,
    pub attributes: RoleAttributes,
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordGateway,
    in_flight: &'a InFlightRequests,
    cleanup: &'a MessageCleanupScheduler,
    icon_boost_requirement: u64,
}

impl<'a> ReviewService<'a> {
    /// Creates a new ReviewService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `discord` - Gateway for posting and editing review messages
    /// - `in_flight` - Shared set of members with an outstanding review
    /// - `cleanup` - Scheduler deleting resolved review messages
    /// - `icon_boost_requirement` - Passed on to the role applier on approval
    pub fn new(
        db: &'a DatabaseConnection,
        discord: &'a dyn DiscordGateway,
        in_flight: &'a InFlightRequests,
        cleanup: &'a MessageCleanupScheduler,
        icon_boost_requirement: u64,
    ) -> Self {
        Self {
            db,
            discord,
            in_flight,
            cleanup,
            icon_boost_requirement,
        }
    }

    /// Posts a role change for review.
    ///
    /// The requester's in-flight slot is reserved before anything is posted and released
    /// again if posting or persisting fails.
    ///
    /// # Arguments
    /// - `settings` - Settings of the guild, providing the review channel
    /// - `request` - Requester and the full set of requested attributes
    ///
    /// # Returns
    /// - `Ok(PendingReview)` - The stored pending review
    /// - `Err(RequestError::NoReviewChannel)` - Guild has no review channel configured
    /// - `Err(RequestError::AlreadyPending)` - Requester already has a review in flight
    /// - `Err(AppError::DiscordErr)` - Failed to post the review message
    /// - `Err(AppError::DbErr)` - Failed to persist the pending review
    pub async fn submit(
        &self,
        settings: &ServerSettings,
        request: ReviewRequest,
    ) -> Result<PendingReview, AppError> {
        let channel_id = settings
            .approval_channel
            .ok_or(RequestError::NoReviewChannel)?;

        if !self
            .in_flight
            .try_reserve(request.guild_id, request.requester_id)
            .await
        {
            return Err(RequestError::AlreadyPending.into());
        }

        let result = self.post(channel_id, &request).await;
        if result.is_err() {
            self.in_flight
                .release(request.guild_id, request.requester_id)
                .await;
        }

        result
    }

    async fn post(
        &self,
        channel_id: u64,
        request: &ReviewRequest,
    ) -> Result<PendingReview, AppError> {
        let attributes = &request.attributes;
        let post = ReviewPost {
            requester_id: request.requester_id,
            name: Some(attributes.name.clone()).filter(|name| !name.is_empty()),
            color: attributes.color,
            icon: attributes.icon.clone(),
        };

        let message_id = self.discord.post_review(channel_id, &post).await?;

        let created = PendingReviewRepository::new(self.db)
            .create(CreatePendingReviewParam {
                message_id,
                guild_id: request.guild_id,
                channel_id,
                payload: RoleChangePayload {
                    name: attributes.name.clone(),
                    color: attributes.color,
                    icon: attributes.icon.clone(),
                    requester_id: request.requester_id,
                },
            })
            .await;

        match created {
            Ok(review) => {
                tracing::info!(
                    "Posted review {} for user {} in guild {}",
                    message_id,
                    request.requester_id,
                    request.guild_id
                );
                Ok(review)
            }
            Err(e) => {
                // A review without a stored request can never be resolved
                if let Err(delete_err) = self.discord.delete_message(channel_id, message_id).await
                {
                    tracing::warn!(
                        "Failed to delete unrecorded review message {}: {}",
                        message_id,
                        delete_err
                    );
                }
                Err(e.into())
            }
        }
    }

    /// Resolves the review posted as `message_id`.
    ///
    /// Claims the stored request first; if another moderator already claimed it, or nothing
    /// is stored for the message, nothing is approved or denied. A stored request whose
    /// payload cannot be read is discarded and treated as missing.
    ///
    /// # Arguments
    /// - `message_id` - Review message the button was pressed on
    /// - `decision` - Approve or deny
    /// - `moderator_id` - Member who pressed the button
    ///
    /// # Returns
    /// - `Ok(ReviewOutcome)` - What happened, including failed approvals
    /// - `Err(AppError::DbErr)` - Failed to claim the stored request
    pub async fn resolve(
        &self,
        message_id: u64,
        decision: ReviewDecision,
        moderator_id: u64,
    ) -> Result<ReviewOutcome, AppError> {
        let Some(review) = PendingReviewRepository::new(self.db)
            .take(message_id)
            .await?
        else {
            return Ok(ReviewOutcome::NoMatchingRequest);
        };

        let outcome = self.decide(&review, decision, moderator_id).await;

        self.in_flight
            .release(review.guild_id, review.requester_id)
            .await;

        Ok(outcome)
    }

    async fn decide(
        &self,
        review: &PendingReview,
        decision: ReviewDecision,
        moderator_id: u64,
    ) -> ReviewOutcome {
        let payload = match review.role_change() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("{}", e);
                return ReviewOutcome::NoMatchingRequest;
            }
        };

        let requester = Mention::User(UserId::new(payload.requester_id));
        let moderator = Mention::User(UserId::new(moderator_id));

        let (outcome, content) = match decision {
            ReviewDecision::Approve => {
                let applier =
                    RoleApplier::new(self.db, self.discord, self.icon_boost_requirement);
                match applier
                    .apply(review.guild_id, payload.requester_id, &payload.attributes())
                    .await
                {
                    Ok(applied) => (
                        ReviewOutcome::Approved {
                            role_id: applied.role_id,
                        },
                        format!(
                            "Custom role for {} was approved by {}.",
                            requester, moderator
                        ),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to apply approved review {}: {}",
                            review.message_id,
                            e
                        );
                        let error = e.to_string();
                        let content = format!(
                            "Custom role for {} was approved by {}, but could not be applied.\n```{}```",
                            requester, moderator, error
                        );
                        (ReviewOutcome::ApplyFailed(error), content)
                    }
                }
            }
            ReviewDecision::Deny => (
                ReviewOutcome::Denied,
                format!("Custom role for {} was denied by {}.", requester, moderator),
            ),
        };

        if let Err(e) = self
            .discord
            .close_review(review.channel_id, review.message_id, &content)
            .await
        {
            tracing::warn!("Failed to close review {}: {}", review.message_id, e);
        }

        if !matches!(outcome, ReviewOutcome::ApplyFailed(_)) {
            if let Err(e) = self
                .cleanup
                .schedule_delete(review.channel_id, review.message_id)
                .await
            {
                tracing::warn!(
                    "Failed to schedule deletion of review {}: {}",
                    review.message_id,
                    e
                );
            }
        }

        outcome
    }

    /// Drops the review posted as `message_id` after the message was deleted.
    ///
    /// Cancels any scheduled cleanup for the message and, if the request was still pending,
    /// discards it and frees the requester's slot.
    ///
    /// # Returns
    /// - `Ok(true)` - A pending request was discarded
    /// - `Ok(false)` - The message had no pending request
    /// - `Err(AppError)` - Failed to cancel the cleanup job or delete the record
    pub async fn discard(&self, message_id: u64) -> Result<bool, AppError> {
        self.cleanup.cancel(message_id).await?;

        let Some(review) = PendingReviewRepository::new(self.db)
            .take(message_id)
            .await?
        else {
            return Ok(false);
        };

        self.in_flight
            .release(review.guild_id, review.requester_id)
            .await;

        tracing::info!(
            "Discarded review {} for user {} after its message was deleted",
            message_id,
            review.requester_id
        );

        Ok(true)
    }
}
