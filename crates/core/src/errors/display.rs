//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store {
                operation, message, ..
            } => {
                write!(f, "store operation '{operation}' failed: {message}")
            }
            Error::Validation { field, message } => {
                write!(f, "validation failed for '{field}': {message}")
            }
            Error::Authorization { message } => {
                write!(f, "access denied: {message}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
