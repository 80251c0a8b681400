//! Pending review domain models.
//!
//! A pending review maps a posted review message to the request awaiting a moderator's
//! decision. The request itself is kept as a JSON payload whose shape depends on the review
//! kind, so new kinds can be added without a schema change.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    error::internal::InternalError,
    model::role::{RoleAttributes, RoleColor},
    util::parse::parse_id,
};

/// Kind of request a review message was posted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewKind {
    RoleChange,
}

impl ReviewKind {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::RoleChange),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Self::RoleChange => 0,
        }
    }
}

/// Payload of a [`ReviewKind::RoleChange`] review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleChangePayload {
    pub name: String,
    pub color: RoleColor,
    #[serde(default)]
    pub icon: Option<String>,
    pub requester_id: u64,
}

impl RoleChangePayload {
    pub fn attributes(&self) -> RoleAttributes {
        RoleAttributes {
            name: self.name.clone(),
            color: self.color,
            icon: self.icon.clone(),
        }
    }
}

/// A review message awaiting a decision.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReview {
    /// Id of the posted review message, the record key.
    pub message_id: u64,
    /// Raw stored kind, validated when the payload is read.
    pub kind: i32,
    /// Raw JSON payload.
    pub payload: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub requester_id: u64,
    pub created_at: DateTime<Utc>,
}

impl PendingReview {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(PendingReview)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse one of the stored ids
    pub fn from_entity(entity: entity::pending_review::Model) -> Result<Self, DbErr> {
        Ok(Self {
            message_id: parse_id("message_id", &entity.message_id)?,
            kind: entity.kind,
            payload: entity.payload,
            guild_id: parse_id("guild_id", &entity.guild_id)?,
            channel_id: parse_id("channel_id", &entity.channel_id)?,
            requester_id: parse_id("requester_id", &entity.requester_id)?,
            created_at: entity.created_at,
        })
    }

    /// Decodes the payload of a role change review.
    ///
    /// # Returns
    /// - `Ok(RoleChangePayload)` - Decoded request
    /// - `Err(InternalError::MalformedPendingReview)` - Unknown kind or invalid JSON
    pub fn role_change(&self) -> Result<RoleChangePayload, InternalError> {
        match ReviewKind::from_i32(self.kind) {
            Some(ReviewKind::RoleChange) => serde_json::from_str(&self.payload).map_err(|e| {
                InternalError::MalformedPendingReview {
                    message_id: self.message_id,
                    reason: e.to_string(),
                }
            }),
            None => Err(InternalError::MalformedPendingReview {
                message_id: self.message_id,
                reason: format!("unknown review kind {}", self.kind),
            }),
        }
    }
}

/// Parameters for persisting a freshly posted role change review.
#[derive(Debug, Clone)]
pub struct CreatePendingReviewParam {
    pub message_id: u64,
    pub guild_id: u64,
    pub channel_id: u64,
    pub payload: RoleChangePayload,
}
