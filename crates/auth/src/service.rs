//! Sign-in orchestration
//!
//! Order matters here: the allowlist is consulted before the identity
//! provider is ever contacted, and an identity that authenticates but cannot
//! be assigned a role is signed out of the provider again before the attempt
//! fails. Every rejection carries the same generic message so a caller cannot
//! distinguish "email not allowed" from "wrong password" (enumeration
//! resistance).

use crate::provider::{AuthenticatedUser, IdentityProvider};
use crate::resolver::AuthorizationResolver;
use crate::token::{SessionTokenCodec, TokenValidation};
use padron_core::{Error, Result, Role};
use std::sync::Arc;
use tracing::{debug, warn};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Successful sign-in: the verified identity, its resolved role, and a fresh
/// session token for the route guard.
#[derive(Debug, Clone)]
pub struct SignIn {
    pub user: AuthenticatedUser,
    pub role: Role,
    pub token: String,
}

/// Front door of the admin dashboard.
pub struct AuthService {
    resolver: AuthorizationResolver,
    provider: Arc<dyn IdentityProvider>,
    tokens: SessionTokenCodec,
}

impl AuthService {
    #[must_use]
    pub fn new(
        resolver: AuthorizationResolver,
        provider: Arc<dyn IdentityProvider>,
        tokens: SessionTokenCodec,
    ) -> Self {
        Self {
            resolver,
            provider,
            tokens,
        }
    }

    /// Authenticate and authorize in one step.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignIn> {
        if !self.resolver.is_allowed(email).await {
            warn!(%email, "sign-in rejected: email not on allowlist");
            return Err(Error::authorization(INVALID_CREDENTIALS));
        }

        let user = match self.provider.sign_in(email, password).await {
            Ok(user) => user,
            Err(err) => {
                debug!(%email, error = %err, "provider rejected credentials");
                return Err(Error::authorization(INVALID_CREDENTIALS));
            }
        };

        let Some(role) = self.resolver.role_of(email).await else {
            // Authenticated but unauthorized: revoke the provider session so
            // no half-authenticated identity lingers. The sign-out result is
            // deliberately ignored; the attempt fails either way.
            warn!(%email, "role undeterminable after sign-in, revoking session");
            let _ = self.provider.sign_out().await;
            return Err(Error::authorization(INVALID_CREDENTIALS));
        };

        let token = self.tokens.issue(&user.uid, role)?;
        debug!(%email, %role, "sign-in succeeded");
        Ok(SignIn { user, role, token })
    }

    /// Tear down the provider session.
    pub async fn sign_out(&self) -> Result<()> {
        self.provider.sign_out().await
    }

    /// Route-guard check: decode the presented token. Consulted on every
    /// navigation; never fails, the outcome is in `is_valid`.
    #[must_use]
    pub fn validate_token(&self, token: &str) -> TokenValidation {
        self.tokens.validate(token)
    }
}
