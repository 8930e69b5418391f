//! Live statistics bridge
//!
//! Subscribes to the store's user feed and recomputes the statistics snapshot
//! on every delivery, publishing the result through a `watch` channel the UI
//! reads from. One task per watcher means recomputations for a subscription
//! never overlap; a snapshot arriving while a computation runs is simply
//! picked up on the next loop iteration (latest state wins).
//!
//! If the feed ends, the last published statistics stay in place: statistics
//! failures are non-fatal to the dashboard.

use crate::aggregate;
use padron_core::{Clock, SystemClock, UserStatistics};
use padron_store::AccessStore;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Handle to a live statistics subscription.
///
/// Dropping the watcher unsubscribes: no further recomputations are
/// scheduled, though one already in flight runs to completion.
pub struct StatisticsWatcher {
    rx: watch::Receiver<UserStatistics>,
    task: JoinHandle<()>,
}

impl StatisticsWatcher {
    /// Subscribe to the store and start recomputing on every snapshot.
    /// The initial statistics reflect the collection state at subscription
    /// time, available immediately.
    #[must_use]
    pub fn spawn(store: &dyn AccessStore) -> Self {
        Self::spawn_with_clock(store, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn spawn_with_clock(store: &dyn AccessStore, clock: Arc<dyn Clock>) -> Self {
        let mut feed = store.subscribe_users();
        let initial = aggregate::compute_at(&feed.latest(), clock.current_year());
        let (tx, rx) = watch::channel(initial);

        let task = tokio::spawn(async move {
            loop {
                let Some(snapshot) = feed.next().await else {
                    warn!("user feed ended, keeping last published statistics");
                    break;
                };
                let stats = aggregate::compute_at(&snapshot, clock.current_year());
                debug!(
                    users = snapshot.len(),
                    total = stats.total_users,
                    "realtime statistics update"
                );
                if tx.send(stats).is_err() {
                    // Nobody is listening and the handle is gone.
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// The most recently computed statistics.
    #[must_use]
    pub fn statistics(&self) -> UserStatistics {
        self.rx.borrow().clone()
    }

    /// A receiver the UI can await changes on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UserStatistics> {
        self.rx.clone()
    }
}

impl Drop for StatisticsWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
