//!
//! Collection: an insertion-ordered key/value container with dynamically typed values.
//!
//! ## Core Concepts
//!
//! * **Collections (`collection::Collection`)**: Ordered mappings from keys to values, with
//!   map-style access, list-style append/pop/shift/front, bulk search/replace/merge, and
//!   JSON export.
//! * **Keys (`collection::Key`)**: Integer indices or string names. Strings spelling a
//!   canonical integer normalize to indices.
//! * **Values (`collection::Value`)**: Null, booleans, integers, floats, text, nested
//!   arrays (themselves collections), and shared object handles.
//! * **Objects (`collection::Object`)**: Opaque values stored behind shared handles that
//!   define their own copy protocol and array export.
//! * **Capabilities (`collection::Arrayable`, `collection::Jsonable`)**: Export as an
//!   ordered mapping or as JSON text.

pub mod collection;
pub mod constants;

pub use collection::{
    Arrayable, Collection, CollectionError, Entries, JsonOptions, Jsonable, Key, Object,
    ObjectRef, Value, deep_copy,
};

/// Result type used throughout the collection library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the collection library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured collection errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Collection(_) => "collection",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error was caused by an empty collection.
    pub fn is_empty_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_empty_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from JSON export or import.
    pub fn is_json_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Collection(err) => err.is_json_error(),
        }
    }
}
