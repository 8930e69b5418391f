//! Registry domain model

mod auth;
mod statistics;
mod user;

pub use auth::{AllowedUser, Role};
pub use statistics::{AcceptanceRates, AgeGroups, GenderBreakdown, UserStatistics};
pub use user::{IdentityDocument, NewUser, UserPatch, UserRecord};
