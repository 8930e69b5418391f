//! TTL-fronted cache of the admin allowlist record
//!
//! Every authorization check reads the allowlist; fetching the record from
//! the store on each check would be wasteful, so reads go through this cache.
//! Freshness is decided at read time against a fixed TTL. The cache prefers
//! availability over freshness: a failed refresh falls back to the previous
//! snapshot when one exists, and to an empty list (meaning "nobody is
//! authorized", not an error) when none does.

use padron_core::{Clock, SystemClock, ADMIN_CACHE_TTL_MS};
use padron_store::AccessStore;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Default)]
struct CacheState {
    emails: Vec<String>,
    fetched_at_ms: i64,
}

/// In-process cache of the admin email allowlist.
///
/// Process-wide mutable state with one logical writer: concurrent stale reads
/// serialize on a single refresh (single-flight) instead of each issuing a
/// redundant store read.
pub struct AdminEmailCache {
    store: Arc<dyn AccessStore>,
    clock: Arc<dyn Clock>,
    ttl_ms: i64,
    state: parking_lot::Mutex<CacheState>,
    refresh: tokio::sync::Mutex<()>,
}

impl AdminEmailCache {
    #[must_use]
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(store: Arc<dyn AccessStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            ttl_ms: ADMIN_CACHE_TTL_MS,
            state: parking_lot::Mutex::new(CacheState::default()),
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    /// The current allowlist. Served from the cached snapshot when it is
    /// non-empty and younger than the TTL; otherwise refetched. Never fails:
    /// a refresh error degrades to the stale snapshot or an empty list.
    pub async fn get(&self) -> Vec<String> {
        if let Some(fresh) = self.fresh_snapshot() {
            return fresh;
        }

        let _refresh = self.refresh.lock().await;
        // Another caller may have finished the refresh while we waited.
        if let Some(fresh) = self.fresh_snapshot() {
            return fresh;
        }

        match self.store.read_allowlist().await {
            Ok(emails) => {
                debug!(count = emails.len(), "fetched admin emails from store");
                let mut state = self.state.lock();
                state.emails = emails.clone();
                state.fetched_at_ms = self.clock.now_ms();
                emails
            }
            Err(err) => {
                warn!(error = %err, "failed to refresh admin emails, serving cached snapshot");
                let state = self.state.lock();
                if state.emails.is_empty() {
                    Vec::new()
                } else {
                    state.emails.clone()
                }
            }
        }
    }

    /// Drop the cached snapshot unconditionally. Called after allowlist
    /// mutations so the next read sees the new record.
    pub fn invalidate(&self) {
        let mut state = self.state.lock();
        state.emails.clear();
        state.fetched_at_ms = 0;
        debug!("admin email cache cleared");
    }

    /// Invalidate, then fetch fresh.
    pub async fn force_refresh(&self) -> Vec<String> {
        self.invalidate();
        self.get().await
    }

    fn fresh_snapshot(&self) -> Option<Vec<String>> {
        let state = self.state.lock();
        let age_ms = self.clock.now_ms() - state.fetched_at_ms;
        if !state.emails.is_empty() && age_ms < self.ttl_ms {
            Some(state.emails.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestStore;
    use padron_core::testing::ManualClock;

    fn setup(emails: &[&str]) -> (Arc<TestStore>, Arc<ManualClock>, AdminEmailCache) {
        let store = Arc::new(TestStore::with_allowlist(emails));
        let clock = Arc::new(ManualClock::recent());
        let cache = AdminEmailCache::with_clock(store.clone(), clock.clone());
        (store, clock, cache)
    }

    #[tokio::test]
    async fn first_read_fetches_and_preserves_order() {
        let (store, _clock, cache) = setup(&["b@x.com", "a@x.com", "c@x.com"]);
        assert_eq!(cache.get().await, vec!["b@x.com", "a@x.com", "c@x.com"]);
        assert_eq!(store.allowlist_reads(), 1);
    }

    #[tokio::test]
    async fn fresh_snapshot_is_served_without_store_reads() {
        let (store, clock, cache) = setup(&["a@x.com"]);
        cache.get().await;

        clock.advance_ms(ADMIN_CACHE_TTL_MS - 1);
        cache.get().await;
        cache.get().await;
        assert_eq!(store.allowlist_reads(), 1);
    }

    #[tokio::test]
    async fn snapshot_at_ttl_age_is_refetched() {
        let (store, clock, cache) = setup(&["a@x.com"]);
        cache.get().await;

        clock.advance_ms(ADMIN_CACHE_TTL_MS);
        cache.get().await;
        assert_eq!(store.allowlist_reads(), 2);
    }

    #[tokio::test]
    async fn refresh_failure_serves_stale_snapshot() {
        let (store, clock, cache) = setup(&["a@x.com"]);
        cache.get().await;

        clock.advance_ms(ADMIN_CACHE_TTL_MS + 1);
        store.fail_reads(true);
        assert_eq!(cache.get().await, vec!["a@x.com"]);
    }

    #[tokio::test]
    async fn refresh_failure_with_no_snapshot_means_nobody_authorized() {
        let (store, _clock, cache) = setup(&["a@x.com"]);
        store.fail_reads(true);
        assert!(cache.get().await.is_empty());
    }

    #[tokio::test]
    async fn empty_allowlist_is_not_treated_as_a_snapshot() {
        // An empty fetch result is never cached as fresh: the next read goes
        // back to the store.
        let (store, _clock, cache) = setup(&[]);
        cache.get().await;
        cache.get().await;
        assert_eq!(store.allowlist_reads(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_the_next_read_to_fetch() {
        let (store, _clock, cache) = setup(&["a@x.com"]);
        cache.get().await;
        cache.invalidate();
        cache.get().await;
        assert_eq!(store.allowlist_reads(), 2);
    }

    #[tokio::test]
    async fn force_refresh_picks_up_store_changes() {
        let (store, _clock, cache) = setup(&["a@x.com"]);
        cache.get().await;

        store.set_allowlist(&["a@x.com", "b@x.com"]);
        assert_eq!(
            cache.force_refresh().await,
            vec!["a@x.com", "b@x.com"]
        );
    }
}
