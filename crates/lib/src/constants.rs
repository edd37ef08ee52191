//! Constants used throughout the collection library.

/// Default maximum nesting depth for JSON export.
pub const DEFAULT_JSON_DEPTH: usize = 512;
