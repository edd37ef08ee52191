//! Keys of a [`Collection`](super::Collection).
//!
//! A key is either an integer index or a string name. Strings that spell an
//! integer in canonical decimal form are normalized to indices, so `"3"` and `3`
//! address the same entry while `"03"` stays a name.

use std::fmt;

/// A collection key.
///
/// # Examples
///
/// ```
/// use collection::Key;
///
/// assert_eq!(Key::from("7"), Key::Index(7));
/// assert_eq!(Key::from("07"), Key::Name("07".to_string()));
/// assert_eq!(Key::from(3usize), Key::Index(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer index, used by append-style operations
    Index(i64),
    /// String name
    Name(String),
}

impl Key {
    /// Returns true for integer keys.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns true for string keys.
    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    /// Returns the integer index, if this is one.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the string name, if this is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// Builds a key from text, normalizing canonical integers to indices.
    fn parse(text: &str) -> Self {
        match canonical_index(text) {
            Some(index) => Key::Index(index),
            None => Key::Name(text.to_string()),
        }
    }
}

/// Parses `text` as an index only when it is the exact decimal rendering of one.
fn canonical_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // "0" is canonical, "00", "01" and "-0" are not
    if digits.starts_with('0') && (digits.len() > 1 || text.starts_with('-')) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_index(&value) {
            Some(index) => Key::Index(index),
            None => Key::Name(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::parse(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Index(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(i64::from(value))
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        // Indices past i64::MAX cannot be stored as integers
        match i64::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::from(value as u64)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        *self == Key::parse(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Key::Index(i) if i == other)
    }
}

impl PartialEq<i32> for Key {
    fn eq(&self, other: &i32) -> bool {
        *self == i64::from(*other)
    }
}
