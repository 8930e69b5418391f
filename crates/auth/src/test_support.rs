//! Test doubles shared by the auth test modules

use crate::provider::{AuthenticatedUser, IdentityProvider};
use async_trait::async_trait;
use padron_core::{Error, NewUser, Result, UserPatch, UserRecord};
use padron_store::{AccessStore, UserFeed, UserSnapshot};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::watch;

/// Allowlist-focused store double that counts reads and can be told to fail.
pub struct TestStore {
    allowlist: Mutex<Vec<String>>,
    reads: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    // Keeps feed subscriptions alive even though auth tests never use them.
    users_tx: watch::Sender<UserSnapshot>,
}

impl TestStore {
    pub fn with_allowlist(emails: &[&str]) -> Self {
        let (users_tx, _) = watch::channel(UserSnapshot::default());
        Self {
            allowlist: Mutex::new(emails.iter().map(ToString::to_string).collect()),
            reads: AtomicUsize::new(0),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            users_tx,
        }
    }

    pub fn set_allowlist(&self, emails: &[&str]) {
        *self.allowlist.lock() = emails.iter().map(ToString::to_string).collect();
    }

    pub fn allowlist_reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccessStore for TestStore {
    async fn read_allowlist(&self) -> Result<Vec<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::store("read_allowlist", "injected failure"));
        }
        Ok(self.allowlist.lock().clone())
    }

    async fn write_allowlist(&self, emails: Vec<String>) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::store("write_allowlist", "injected failure"));
        }
        *self.allowlist.lock() = emails;
        Ok(())
    }

    async fn all_users(&self) -> Result<Vec<UserRecord>> {
        Ok(Vec::new())
    }

    async fn user_by_id(&self, _id: &str) -> Result<Option<UserRecord>> {
        Ok(None)
    }

    async fn users_by_department(&self, _department: &str) -> Result<Vec<UserRecord>> {
        Ok(Vec::new())
    }

    async fn users_by_gender(&self, _genero: &str) -> Result<Vec<UserRecord>> {
        Ok(Vec::new())
    }

    async fn create_user(&self, _user: NewUser) -> Result<String> {
        Err(Error::store("create_user", "not supported by TestStore"))
    }

    async fn update_user(&self, _id: &str, _patch: UserPatch) -> Result<()> {
        Err(Error::store("update_user", "not supported by TestStore"))
    }

    async fn delete_user(&self, _id: &str) -> Result<()> {
        Err(Error::store("delete_user", "not supported by TestStore"))
    }

    fn subscribe_users(&self) -> UserFeed {
        UserFeed::new(self.users_tx.subscribe())
    }
}

/// Identity provider double accepting exactly one email/password pair.
pub struct TestProvider {
    email: String,
    password: String,
    sign_ins: AtomicUsize,
    sign_outs: AtomicUsize,
}

impl TestProvider {
    pub fn accepting(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            sign_ins: AtomicUsize::new(0),
            sign_outs: AtomicUsize::new(0),
        }
    }

    pub fn sign_in_calls(&self) -> usize {
        self.sign_ins.load(Ordering::SeqCst)
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for TestProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        self.sign_ins.fetch_add(1, Ordering::SeqCst);
        if email == self.email && password == self.password {
            Ok(AuthenticatedUser {
                uid: format!("uid-{email}"),
                email: email.to_string(),
            })
        } else {
            Err(Error::authorization("provider rejected credentials"))
        }
    }

    async fn sign_out(&self) -> Result<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
