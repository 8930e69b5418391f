//! The document store contract consumed by the core

use crate::feed::UserFeed;
use async_trait::async_trait;
use padron_core::{NewUser, Result, UserPatch, UserRecord};

/// Read/write contract over the managed document store.
///
/// Implementations are expected to surface I/O failures as
/// [`padron_core::Error::Store`]; the one deliberate exception is a missing
/// allowlist record, which reads as an empty list rather than an error so
/// that a freshly provisioned deployment simply authorizes nobody.
#[async_trait]
pub trait AccessStore: Send + Sync {
    /// Read the admin allowlist. Missing record yields an empty list.
    async fn read_allowlist(&self) -> Result<Vec<String>>;

    /// Replace the admin allowlist wholesale.
    async fn write_allowlist(&self, emails: Vec<String>) -> Result<()>;

    /// All registered users, ordered by creation time descending.
    async fn all_users(&self) -> Result<Vec<UserRecord>>;

    /// Look up a single user by store-assigned id.
    async fn user_by_id(&self, id: &str) -> Result<Option<UserRecord>>;

    /// Users residing in the given department (exact match).
    async fn users_by_department(&self, department: &str) -> Result<Vec<UserRecord>>;

    /// Users with the given gender value (exact match, as stored).
    async fn users_by_gender(&self, genero: &str) -> Result<Vec<UserRecord>>;

    /// Create a user, returning the store-assigned id. The store stamps
    /// `created_at`/`updated_at` itself.
    async fn create_user(&self, user: NewUser) -> Result<String>;

    /// Apply a partial update; the store re-stamps `updated_at`.
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<()>;

    /// Delete a user by id.
    async fn delete_user(&self, id: &str) -> Result<()>;

    /// Subscribe to live full-collection snapshots. The feed starts at the
    /// current state; dropping it cancels the subscription.
    fn subscribe_users(&self) -> UserFeed;
}
