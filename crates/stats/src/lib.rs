//! Statistics aggregation for the padron dashboard
//!
//! Two pieces: a pure aggregation function ([`aggregate::compute`]) that
//! derives a full [`padron_core::UserStatistics`] snapshot from a user
//! collection, and a live bridge ([`StatisticsWatcher`]) that re-runs it on
//! every snapshot the store's subscription feed delivers.
//!
//! The aggregator deliberately holds no state between calls: every
//! invocation rescans its input. At the registry's data scale full
//! recomputation is cheaper to reason about than incremental maintenance,
//! and the live bridge only ever needs the statistics for the latest
//! snapshot anyway.

pub mod aggregate;
pub mod watch;

pub use aggregate::{compute, compute_at};
pub use watch::StatisticsWatcher;
