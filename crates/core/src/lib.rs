//! Core domain types, errors, and constants for the `padron` admin backend.
//!
//! This crate establishes the foundational data structures and error handling
//! mechanisms used throughout the workspace. It aims to provide clear,
//! type-safe, and consistent building blocks.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`types`**: Contains the registry domain model: `UserRecord` and its
//!   creation/update payloads, the derived `UserStatistics` snapshot, and the
//!   `Role`/`AllowedUser` authorization types.
//! - **`clock`**: A small clock abstraction so time-window logic (cache TTL,
//!   token expiry, age buckets) is testable without sleeping.
//! - **`constants`**: Shared constants such as cache and token lifetimes and
//!   document store collection names.

pub mod clock;
pub mod constants;
pub mod errors;
pub mod testing;
pub mod types;

pub use self::{
    clock::{Clock, SystemClock},
    constants::*,
    errors::{Error, Result},
    types::*,
};
