//! Authorization roles and allowlist-derived records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a signed-in identity holds.
///
/// The type admits a `User` tier, but the current allowlist scheme only ever
/// produces `Admin`: every email on the list is an administrator. Callers
/// should still match on the role rather than assume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(crate::errors::Error::validation(
                "role",
                format!("unknown role '{other}'"),
            )),
        }
    }
}

/// One entry of the resolved allowlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedUser {
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}
