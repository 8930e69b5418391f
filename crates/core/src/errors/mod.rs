//! Error types and result alias for padron operations

mod builders;
mod conversions;
mod display;
mod types;

pub use types::{Error, Result};
