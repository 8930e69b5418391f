//! Core error type definitions

/// Result type alias for padron operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for padron operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document store I/O failures (network, permission, missing record)
    Store {
        operation: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed or incomplete input (missing required fields, bad payloads)
    Validation { field: String, message: String },

    /// Email not on the allowlist, or role undeterminable after sign-in
    Authorization { message: String },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
