//! Per-guild set of members with a review awaiting a decision.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};
use tokio::sync::RwLock;

use crate::model::pending_review::PendingReview;

/// Members with an outstanding review, keyed by guild.
///
/// Cloning shares the same underlying set. Reservation is a check-and-insert under one write
/// lock, so two concurrent requests from the same member cannot both reserve a slot.
#[derive(Clone, Default)]
pub struct InFlightRequests {
    inner: Arc<RwLock<HashMap<u64, HashSet<u64>>>>,
}

impl InFlightRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the set from the reviews still pending in the store.
    pub async fn hydrate(&self, reviews: &[PendingReview]) {
        let mut inner = self.inner.write().await;
        for review in reviews {
            inner
                .entry(review.guild_id)
                .or_default()
                .insert(review.requester_id);
        }
    }

    /// Reserves the review slot of a member.
    ///
    /// # Returns
    /// - `true` - Slot reserved by this call
    /// - `false` - The member already has a review in flight in this guild
    pub async fn try_reserve(&self, guild_id: u64, user_id: u64) -> bool {
        self.inner
            .write()
            .await
            .entry(guild_id)
            .or_default()
            .insert(user_id)
    }

    /// Releases the review slot of a member. Releasing a free slot is a no-op.
    pub async fn release(&self, guild_id: u64, user_id: u64) {
        let mut inner = self.inner.write().await;
        if let Some(users) = inner.get_mut(&guild_id) {
            users.remove(&user_id);
            if users.is_empty() {
                inner.remove(&guild_id);
            }
        }
    }

    pub async fn contains(&self, guild_id: u64, user_id: u64) -> bool {
        self.inner
            .read()
            .await
            .get(&guild_id)
            .is_some_and(|users| users.contains(&user_id))
    }
}
