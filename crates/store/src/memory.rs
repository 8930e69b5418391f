//! In-process reference implementation of the access store
//!
//! Backs tests and local development. Mutations take a write lock, publish a
//! fresh snapshot to the live feed, and stamp timestamps the way a managed
//! store would on the server side.

use crate::feed::{UserFeed, UserSnapshot};
use crate::traits::AccessStore;
use async_trait::async_trait;
use padron_core::{Clock, Error, NewUser, Result, SystemClock, UserPatch, UserRecord};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    users: Vec<UserRecord>,
    // None models "allowlist record does not exist yet"
    allowlist: Option<Vec<String>>,
}

/// In-memory document store with live snapshot publication.
pub struct MemoryStore {
    clock: Arc<dyn Clock>,
    inner: RwLock<Inner>,
    users_tx: watch::Sender<UserSnapshot>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let (users_tx, _) = watch::channel(Arc::new(Vec::new()) as UserSnapshot);
        Self {
            clock,
            inner: RwLock::new(Inner::default()),
            users_tx,
        }
    }

    fn sorted(users: &[UserRecord]) -> Vec<UserRecord> {
        let mut users = users.to_vec();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        users
    }

    fn publish(&self, inner: &Inner) {
        let snapshot: UserSnapshot = Arc::new(Self::sorted(&inner.users));
        debug!(users = snapshot.len(), "publishing user snapshot");
        self.users_tx.send_replace(snapshot);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessStore for MemoryStore {
    async fn read_allowlist(&self) -> Result<Vec<String>> {
        Ok(self.inner.read().allowlist.clone().unwrap_or_default())
    }

    async fn write_allowlist(&self, emails: Vec<String>) -> Result<()> {
        debug!(count = emails.len(), "writing admin allowlist");
        self.inner.write().allowlist = Some(emails);
        Ok(())
    }

    async fn all_users(&self) -> Result<Vec<UserRecord>> {
        Ok(Self::sorted(&self.inner.read().users))
    }

    async fn user_by_id(&self, id: &str) -> Result<Option<UserRecord>> {
        Ok(self.inner.read().users.iter().find(|u| u.id == id).cloned())
    }

    async fn users_by_department(&self, department: &str) -> Result<Vec<UserRecord>> {
        let inner = self.inner.read();
        Ok(Self::sorted(&inner.users)
            .into_iter()
            .filter(|u| u.department_of_residency == department)
            .collect())
    }

    async fn users_by_gender(&self, genero: &str) -> Result<Vec<UserRecord>> {
        let inner = self.inner.read();
        Ok(Self::sorted(&inner.users)
            .into_iter()
            .filter(|u| u.genero == genero)
            .collect())
    }

    async fn create_user(&self, user: NewUser) -> Result<String> {
        user.validate()?;
        let id = Uuid::new_v4().to_string();
        let record = user.into_record(id.clone(), self.clock.now());
        let mut inner = self.inner.write();
        inner.users.push(record);
        self.publish(&inner);
        debug!(%id, "user created");
        Ok(id)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<()> {
        let mut inner = self.inner.write();
        let record = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::store("update_user", format!("no user with id '{id}'")))?;
        patch.apply(record, self.clock.now());
        self.publish(&inner);
        debug!(%id, "user updated");
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write();
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        if inner.users.len() == before {
            return Err(Error::store(
                "delete_user",
                format!("no user with id '{id}'"),
            ));
        }
        self.publish(&inner);
        debug!(%id, "user deleted");
        Ok(())
    }

    fn subscribe_users(&self) -> UserFeed {
        UserFeed::new(self.users_tx.subscribe())
    }
}
