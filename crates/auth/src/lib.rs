//! Authorization and session management for the padron admin dashboard
//!
//! Access is allowlist-based: a single store record lists the emails allowed
//! to sign in, and in the current scheme every listed email is an
//! administrator. This crate provides the pieces the dashboard's login guard
//! and route protection consume:
//!
//! - [`AdminEmailCache`] — TTL-fronted view of the allowlist record, degrading
//!   to stale-or-empty on store failures rather than erroring.
//! - [`AuthorizationResolver`] — answers "is this email allowed, and as what
//!   role?", with role assignment behind a pluggable [`RoleStrategy`].
//! - [`SessionTokenCodec`] — issues and validates the bearer token carried by
//!   the client between navigations.
//! - [`AllowlistManager`] — read-modify-write mutation of the allowlist
//!   record, invalidating the cache after every successful change.
//! - [`AuthService`] — the sign-in orchestration over an external
//!   [`IdentityProvider`].

pub mod allowlist;
pub mod cache;
pub mod provider;
pub mod resolver;
pub mod service;
pub mod token;

pub use allowlist::AllowlistManager;
pub use cache::AdminEmailCache;
pub use provider::{AuthenticatedUser, IdentityProvider};
pub use resolver::{AdminOnly, AuthorizationResolver, RoleStrategy};
pub use service::{AuthService, SignIn};
pub use token::{SessionTokenCodec, TokenValidation};

#[cfg(test)]
pub(crate) mod test_support;
