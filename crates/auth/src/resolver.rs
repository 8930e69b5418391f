//! Authorization resolution over the cached allowlist
//!
//! Lookup is exact, case-sensitive string comparison; no normalization is
//! applied to either side. Whether comparison should be case-insensitive is
//! an open product question recorded in DESIGN.md.

use crate::cache::AdminEmailCache;
use padron_core::{AllowedUser, Role};
use std::sync::Arc;

/// Assigns a role to an allowlisted email.
///
/// The current deployment has exactly one tier: everybody on the list is an
/// admin. Keeping the assignment behind a trait lets a future multi-role
/// scheme slot in without touching any resolver caller.
pub trait RoleStrategy: Send + Sync {
    /// The role the given allowlisted email holds, or `None` to exclude the
    /// entry entirely.
    fn resolve(&self, email: &str) -> Option<Role>;
}

/// Every allowlisted email is an active administrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminOnly;

impl RoleStrategy for AdminOnly {
    fn resolve(&self, _email: &str) -> Option<Role> {
        Some(Role::Admin)
    }
}

/// Answers access and role questions for the login guard.
pub struct AuthorizationResolver {
    cache: Arc<AdminEmailCache>,
    strategy: Arc<dyn RoleStrategy>,
}

impl AuthorizationResolver {
    #[must_use]
    pub fn new(cache: Arc<AdminEmailCache>) -> Self {
        Self::with_strategy(cache, Arc::new(AdminOnly))
    }

    #[must_use]
    pub fn with_strategy(cache: Arc<AdminEmailCache>, strategy: Arc<dyn RoleStrategy>) -> Self {
        Self { cache, strategy }
    }

    /// The allowlist resolved into full records.
    pub async fn allowed_users(&self) -> Vec<AllowedUser> {
        self.cache
            .get()
            .await
            .into_iter()
            .filter_map(|email| {
                let role = self.strategy.resolve(&email)?;
                Some(AllowedUser {
                    email,
                    role,
                    is_active: true,
                })
            })
            .collect()
    }

    /// Whether the email is permitted to sign in.
    pub async fn is_allowed(&self, email: &str) -> bool {
        self.allowed_users()
            .await
            .iter()
            .any(|user| user.email == email && user.is_active)
    }

    /// The role the email holds, or `None` when it is not on the list.
    pub async fn role_of(&self, email: &str) -> Option<Role> {
        self.allowed_users()
            .await
            .into_iter()
            .find(|user| user.email == email && user.is_active)
            .map(|user| user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestStore;

    fn resolver(emails: &[&str]) -> (Arc<TestStore>, AuthorizationResolver) {
        let store = Arc::new(TestStore::with_allowlist(emails));
        let cache = Arc::new(AdminEmailCache::new(store.clone()));
        (store, AuthorizationResolver::new(cache))
    }

    #[tokio::test]
    async fn allowlisted_email_is_admin() {
        let (store, resolver) = resolver(&["a@x.com"]);

        assert!(resolver.is_allowed("a@x.com").await);
        assert_eq!(store.allowlist_reads(), 1);
        assert_eq!(resolver.role_of("a@x.com").await, Some(Role::Admin));
        assert!(!resolver.is_allowed("b@x.com").await);
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let (_store, resolver) = resolver(&["Admin@X.com"]);
        assert!(resolver.is_allowed("Admin@X.com").await);
        assert!(!resolver.is_allowed("admin@x.com").await);
    }

    #[tokio::test]
    async fn every_cached_email_resolves_active_admin() {
        let (_store, resolver) = resolver(&["a@x.com", "b@x.com"]);
        let users = resolver.allowed_users().await;
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.role == Role::Admin && u.is_active));
    }

    #[tokio::test]
    async fn role_of_unknown_email_is_none() {
        let (_store, resolver) = resolver(&["a@x.com"]);
        assert_eq!(resolver.role_of("b@x.com").await, None);
    }

    #[tokio::test]
    async fn strategy_exclusions_apply_to_both_queries() {
        struct DenyAll;
        impl RoleStrategy for DenyAll {
            fn resolve(&self, _email: &str) -> Option<Role> {
                None
            }
        }

        let store = Arc::new(TestStore::with_allowlist(&["a@x.com"]));
        let cache = Arc::new(AdminEmailCache::new(store));
        let resolver = AuthorizationResolver::with_strategy(cache, Arc::new(DenyAll));

        assert!(!resolver.is_allowed("a@x.com").await);
        assert_eq!(resolver.role_of("a@x.com").await, None);
    }
}
