//! Live user-collection feed
//!
//! The store publishes full snapshots of the user collection through a
//! `tokio::sync::watch` channel. Watch semantics fit what consumers need:
//! the feed always has a current value, a later snapshot may supersede one
//! that was never observed, and within one feed snapshots are seen in
//! commit order. Consumers that fall behind simply skip straight
//! to the latest state, which is harmless because statistics are pure
//! functions of the snapshot they are given.

use padron_core::UserRecord;
use std::sync::Arc;
use tokio::sync::watch;

/// A full point-in-time copy of the user collection, cheap to clone and share.
pub type UserSnapshot = Arc<Vec<UserRecord>>;

/// Receiving half of a user-collection subscription.
///
/// Dropping the feed unsubscribes: the store side keeps publishing for other
/// feeds, but this consumer gets no further deliveries. A computation already
/// running on a previously received snapshot is not interrupted.
#[derive(Debug)]
pub struct UserFeed {
    rx: watch::Receiver<UserSnapshot>,
}

impl UserFeed {
    /// Wrap the receiving half of a store's snapshot channel. Store
    /// implementations call this from `subscribe_users`.
    #[must_use]
    pub fn new(rx: watch::Receiver<UserSnapshot>) -> Self {
        Self { rx }
    }

    /// The most recently published snapshot, available immediately on
    /// subscription without waiting for a change.
    #[must_use]
    pub fn latest(&self) -> UserSnapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next snapshot after the last one observed through this
    /// feed. Returns `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<UserSnapshot> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }
}
