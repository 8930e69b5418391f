//! Allowlist administration
//!
//! The allowlist is a single record mutated wholesale: read, modify, write
//! back. Every successful mutation invalidates the admin email cache so the
//! next authorization check sees the new list immediately instead of waiting
//! out the TTL.

use crate::cache::AdminEmailCache;
use padron_core::{Error, Result};
use padron_store::AccessStore;
use std::sync::Arc;
use tracing::info;

/// Add/remove operations over the admin allowlist record.
pub struct AllowlistManager {
    store: Arc<dyn AccessStore>,
    cache: Arc<AdminEmailCache>,
}

impl AllowlistManager {
    #[must_use]
    pub fn new(store: Arc<dyn AccessStore>, cache: Arc<AdminEmailCache>) -> Self {
        Self { store, cache }
    }

    /// The allowlist as currently persisted, bypassing the cache.
    pub async fn emails(&self) -> Result<Vec<String>> {
        self.store.read_allowlist().await
    }

    /// Append an email. Fails when the email is already present, so the
    /// record never holds duplicates.
    pub async fn add_email(&self, email: &str) -> Result<()> {
        let mut emails = self.store.read_allowlist().await?;
        if emails.iter().any(|e| e == email) {
            return Err(Error::validation(
                "email",
                "already exists in the admin list",
            ));
        }

        emails.push(email.to_string());
        self.store.write_allowlist(emails).await?;
        self.cache.invalidate();
        info!(%email, "admin email added");
        Ok(())
    }

    /// Remove an email. Fails when the email is not on the list.
    pub async fn remove_email(&self, email: &str) -> Result<()> {
        let emails = self.store.read_allowlist().await?;
        let remaining: Vec<String> = emails.iter().filter(|e| *e != email).cloned().collect();
        if remaining.len() == emails.len() {
            return Err(Error::validation("email", "not found in the admin list"));
        }

        self.store.write_allowlist(remaining).await?;
        self.cache.invalidate();
        info!(%email, "admin email removed");
        Ok(())
    }
}
