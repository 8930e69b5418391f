//! Session token issuance and validation
//!
//! Tokens are base64-encoded JSON claims: `{userId, role, timestamp}`. The
//! encoding is reversible and carries no signature, so it proves nothing by
//! itself — the route guard it feeds is advisory, client-side protection
//! only. A production deployment needs a MAC or asymmetric signature; the
//! unsigned format is kept here for compatibility with the existing clients
//! and recorded as a known limitation in DESIGN.md.
//!
//! Validation never returns an error: malformed input resolves to
//! `is_valid: false` with empty fields, and well-formed tokens are valid
//! exactly while their age stays under 24 hours.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use padron_core::{Clock, Result, Role, SystemClock, SESSION_TOKEN_TTL_MS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    user_id: String,
    role: String,
    timestamp: i64,
}

/// Outcome of decoding a presented token.
///
/// `user_id` and `role` are only meaningful when `is_valid` is true; for
/// malformed input both are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValidation {
    pub user_id: String,
    pub role: String,
    pub is_valid: bool,
}

impl TokenValidation {
    fn invalid() -> Self {
        Self {
            user_id: String::new(),
            role: String::new(),
            is_valid: false,
        }
    }
}

/// Creates and checks session bearer tokens.
pub struct SessionTokenCodec {
    clock: Arc<dyn Clock>,
    lifetime_ms: i64,
}

impl SessionTokenCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            lifetime_ms: SESSION_TOKEN_TTL_MS,
        }
    }

    /// Issue a token for the given identity, stamped with the current time.
    pub fn issue(&self, user_id: &str, role: Role) -> Result<String> {
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            role: role.as_str().to_string(),
            timestamp: self.clock.now_ms(),
        };
        let json = serde_json::to_vec(&claims)?;
        Ok(BASE64.encode(json))
    }

    /// Decode and check a presented token. All failure modes — bad base64,
    /// bad JSON, missing fields, expiry — land in the `is_valid` flag.
    #[must_use]
    pub fn validate(&self, token: &str) -> TokenValidation {
        let Ok(bytes) = BASE64.decode(token) else {
            return TokenValidation::invalid();
        };
        let Ok(claims) = serde_json::from_slice::<TokenClaims>(&bytes) else {
            return TokenValidation::invalid();
        };

        let age_ms = self.clock.now_ms() - claims.timestamp;
        TokenValidation {
            user_id: claims.user_id,
            role: claims.role,
            is_valid: age_ms < self.lifetime_ms,
        }
    }
}

impl Default for SessionTokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padron_core::testing::ManualClock;

    fn codec() -> (Arc<ManualClock>, SessionTokenCodec) {
        let clock = Arc::new(ManualClock::recent());
        let codec = SessionTokenCodec::with_clock(clock.clone());
        (clock, codec)
    }

    #[test]
    fn issue_then_validate_round_trips() {
        let (_clock, codec) = codec();
        let token = codec.issue("uid-1", Role::Admin).unwrap();

        let validation = codec.validate(&token);
        assert_eq!(validation.user_id, "uid-1");
        assert_eq!(validation.role, "admin");
        assert!(validation.is_valid);
    }

    #[test]
    fn token_survives_until_just_before_the_deadline() {
        let (clock, codec) = codec();
        let token = codec.issue("uid-1", Role::User).unwrap();

        clock.advance_ms(SESSION_TOKEN_TTL_MS - 1);
        assert!(codec.validate(&token).is_valid);
    }

    #[test]
    fn token_expires_after_24_hours() {
        let (clock, codec) = codec();
        let token = codec.issue("uid-1", Role::Admin).unwrap();

        clock.advance_ms(SESSION_TOKEN_TTL_MS + 1);
        let validation = codec.validate(&token);
        assert!(!validation.is_valid);
        // Identity still decodes; only the validity window has closed.
        assert_eq!(validation.user_id, "uid-1");
    }

    #[test]
    fn malformed_input_is_invalid_with_empty_fields() {
        let (_clock, codec) = codec();
        for garbage in ["", "not base64 !!!", "bm90IGpzb24="] {
            let validation = codec.validate(garbage);
            assert_eq!(validation, TokenValidation::invalid(), "input: {garbage:?}");
        }
    }

    #[test]
    fn valid_json_missing_fields_is_invalid() {
        let (_clock, codec) = codec();
        let token = BASE64.encode(br#"{"userId":"uid-1"}"#);
        assert!(!codec.validate(&token).is_valid);
    }

    #[test]
    fn wire_format_is_base64_of_json_claims() {
        let (clock, codec) = codec();
        let token = codec.issue("uid-1", Role::Admin).unwrap();

        let decoded: serde_json::Value =
            serde_json::from_slice(&BASE64.decode(&token).unwrap()).unwrap();
        assert_eq!(decoded["userId"], "uid-1");
        assert_eq!(decoded["role"], "admin");
        assert_eq!(decoded["timestamp"], clock.now_ms());
    }
}
