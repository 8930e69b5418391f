//! Access store contract for the padron admin backend
//!
//! The dashboard treats its document database as an external collaborator:
//! everything above this crate programs against the [`AccessStore`] trait and
//! never against a concrete backend. The trait covers the two record families
//! the core needs — the admin allowlist (one record, mutated wholesale) and
//! the registered-user collection (keyed CRUD plus a live snapshot feed).
//!
//! [`MemoryStore`] is the in-process implementation used by tests and local
//! development. It honors the same contract a managed document store would:
//! server-side timestamp stamping, creation-time-descending reads, and a feed
//! that always starts from the current snapshot.

pub mod feed;
pub mod memory;
pub mod traits;

pub use feed::{UserFeed, UserSnapshot};
pub use memory::MemoryStore;
pub use traits::AccessStore;
