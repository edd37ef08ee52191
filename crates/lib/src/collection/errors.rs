//! Error types for collection operations.
//!
//! These cover the caller-contract violations a collection can report (direct
//! access to a missing key, reading the first element of an empty collection)
//! and the ways JSON export and import can fail.

use thiserror::Error;

/// Structured error types for collection operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Direct access to a key that is not present
    #[error("Undefined array key \"{key}\"")]
    UndefinedKey { key: String },

    /// Operation needs at least one element
    #[error("Cannot {operation} on an empty collection")]
    Empty { operation: String },

    /// Value had an unexpected type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// JSON export nested deeper than the configured limit
    #[error("Maximum JSON depth of {depth} exceeded")]
    DepthExceeded { depth: usize },

    /// JSON export was asked for a depth of zero
    #[error("JSON depth must be greater than zero")]
    InvalidDepth,

    /// NaN and infinities have no JSON representation
    #[error("Inf and NaN cannot be JSON encoded: {value}")]
    NonFiniteNumber { value: f64 },

    /// JSON text could not be decoded
    #[error("JSON decode failed: {reason}")]
    DecodeFailed { reason: String },
}

impl CollectionError {
    /// Check if this error indicates a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::UndefinedKey { .. })
    }

    /// Check if this error was caused by an empty collection
    pub fn is_empty_error(&self) -> bool {
        matches!(self, CollectionError::Empty { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, CollectionError::TypeMismatch { .. })
    }

    /// Check if this error came from JSON export or import
    pub fn is_json_error(&self) -> bool {
        matches!(
            self,
            CollectionError::DepthExceeded { .. }
                | CollectionError::InvalidDepth
                | CollectionError::NonFiniteNumber { .. }
                | CollectionError::DecodeFailed { .. }
        )
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            CollectionError::UndefinedKey { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
