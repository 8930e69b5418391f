//! External identity provider contract
//!
//! Credential checking is delegated to a managed identity service; this crate
//! only decides authorization. The provider owns its own server-side session,
//! which is why sign-out is part of the contract: an identity that
//! authenticates but turns out to be unauthorized must be revoked there too.

use async_trait::async_trait;
use padron_core::Result;

/// An identity the provider has verified credentials for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Provider-assigned stable identifier.
    pub uid: String,
    pub email: String,
}

/// Credential verification service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify the credentials and establish a provider-side session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser>;

    /// Tear down the current provider-side session.
    async fn sign_out(&self) -> Result<()>;
}
