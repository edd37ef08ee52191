//! Ordered key/value collections.
//!
//! [`Collection`] is an insertion-ordered mapping from [`Key`]s (integer
//! indices or string names) to dynamically typed [`Value`]s. It combines
//! map-style access (`get`, `set`, `remove`) with list-style operations (`push`,
//! `pop`, `shift`, `front`) that use the next free integer index, bulk operations
//! (`search`, `replace`, `merge`), deep copying, and JSON export.
//!
//! # Usage
//!
//! ```
//! use collection::{Collection, Value};
//!
//! let mut c = Collection::from_pairs([("foo", "bar"), ("php", "7.0")]);
//! assert_eq!(c.count(), 2);
//! assert_eq!(c.get("foo"), Some(&Value::from("bar")));
//! assert_eq!(c.search("bar", false), Some("foo".into()));
//! assert!(c.clear().is_empty());
//!
//! let mut list = Collection::new();
//! list.push("foo").push("bar");
//! assert_eq!(list.first().unwrap(), "foo");
//! assert_eq!(list.last(), Some(&Value::from("bar")));
//! assert_eq!(list.to_json_string().unwrap(), r#"["foo","bar"]"#);
//! ```
//!
//! # Copy semantics
//!
//! `Clone` copies the structure: nested arrays are duplicated, objects stay
//! shared handles. [`Collection::deep_clone`] additionally copies every object
//! through its own [`Object::clone_object`].
//!
//! # Next free index
//!
//! Appends use the next free index, which starts at 0 and moves past every
//! integer key that is set. Removing entries does not lower it, except that
//! `pop` gives back the index of the element it removed when that element was
//! the most recent append. `front`, `shift` and `clear` renumber and reset it.
//! Once key `i64::MAX` is taken there is no next free index and appends are
//! refused with a warning until it is given back.

use std::{fmt, ops};

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::{Result, constants::DEFAULT_JSON_DEPTH};

pub mod errors;
pub mod json;
pub mod key;
pub mod object;
pub mod traits;
pub mod value;

pub use errors::CollectionError;
pub use json::JsonOptions;
pub use key::Key;
pub use object::{Object, ObjectRef};
pub use traits::{Arrayable, Jsonable};
pub use value::Value;

/// Ordered mapping backing a collection.
pub type Entries = IndexMap<Key, Value>;

/// An insertion-ordered key/value collection.
///
/// See the [module documentation](self) for an overview.
///
/// `clone()` shares object values with the original; use
/// [`Collection::deep_clone`] to copy them as well.
#[derive(Debug, Clone)]
pub struct Collection {
    items: Entries,
    /// Key used by the next append, `None` once `i64::MAX` is taken
    next_index: Option<i64>,
}

impl Default for Collection {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl Collection {
    /// Creates a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Entries::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Uses an existing ordered mapping as-is.
    pub fn from_entries(items: Entries) -> Self {
        let highest = items
            .keys()
            .filter_map(Key::as_index)
            .filter(|i| *i >= 0)
            .max();
        let next_index = match highest {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        Self { items, next_index }
    }

    /// Builds from anything that can export itself as an array.
    ///
    /// Another collection exports its entries through [`Collection::all`].
    pub fn from_arrayable<A: Arrayable + ?Sized>(source: &A) -> Self {
        Self::from_entries(source.to_array())
    }

    /// Drains key/value pairs in iteration order; later duplicates overwrite.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        pairs.into_iter().collect()
    }

    /// Converts a single value the way an array cast does.
    ///
    /// Null becomes an empty collection, an array is used as-is, an object
    /// contributes its properties, and any scalar becomes a one-element list.
    pub fn from_value(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => Self::new(),
            Value::Array(items) => items,
            Value::Object(object) => object.properties(),
            scalar => Self::from(vec![scalar]),
        }
    }

    /// Decodes JSON text; objects and arrays both become collections.
    pub fn from_json(text: &str) -> Result<Self> {
        json::decode(text)
    }

    // ===== LOOKUP =====

    /// Returns true if the key is present, whatever its value
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Alias for [`Collection::has`]
    pub fn offset_exists(&self, key: impl Into<Key>) -> bool {
        self.has(key)
    }

    /// Gets a value by key, `None` when absent
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.items.get(&key.into())
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.items.get_mut(&key.into())
    }

    /// Direct access: fails with [`CollectionError::UndefinedKey`] when absent.
    pub fn offset_get(&self, key: impl Into<Key>) -> Result<&Value> {
        let key = key.into();
        self.items.get(&key).ok_or_else(|| {
            CollectionError::UndefinedKey {
                key: key.to_string(),
            }
            .into()
        })
    }

    /// First value in iteration order.
    ///
    /// Fails with [`CollectionError::Empty`] on an empty collection, unlike
    /// [`Collection::last`] which returns `None`.
    pub fn first(&self) -> Result<&Value> {
        self.items.first().map(|(_, value)| value).ok_or_else(|| {
            CollectionError::Empty {
                operation: "first".to_string(),
            }
            .into()
        })
    }

    /// Last value in iteration order, `None` when empty
    pub fn last(&self) -> Option<&Value> {
        self.items.last().map(|(_, value)| value)
    }

    /// Returns the first key holding `needle`.
    ///
    /// Uses [`Value::strict_eq`] when `strict` is set, [`Value::loose_eq`]
    /// otherwise.
    pub fn search(&self, needle: impl Into<Value>, strict: bool) -> Option<Key> {
        self.find(&needle.into(), strict).cloned()
    }

    fn find(&self, needle: &Value, strict: bool) -> Option<&Key> {
        self.items
            .iter()
            .find(|(_, value)| {
                if strict {
                    value.strict_eq(needle)
                } else {
                    value.loose_eq(needle)
                }
            })
            .map(|(key, _)| key)
    }

    // ===== MUTATION =====

    /// Sets a value at `key`, overwriting in place when the key exists
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if let Key::Index(index) = key
            && self.next_index.is_some_and(|next| index >= next)
        {
            self.next_index = index.checked_add(1);
        }
        self.items.insert(key, value.into());
        self
    }

    /// Sets at `key`, or appends when no key is given
    pub fn offset_set<K: Into<Key>>(&mut self, key: Option<K>, value: impl Into<Value>) {
        match key {
            Some(key) => self.set(key, value),
            None => self.push(value),
        };
    }

    /// Appends using the next free index.
    ///
    /// When there is no next free index the value is dropped and a warning is
    /// logged; existing entries are never overwritten.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        let Some(index) = self.next_index else {
            warn!("cannot append: the next integer key is already occupied");
            return self;
        };
        self.next_index = index.checked_add(1);
        self.items.insert(Key::Index(index), value.into());
        self
    }

    /// Inserts a value at the front; integer keys are renumbered from 0
    pub fn front(&mut self, value: impl Into<Value>) -> &mut Self {
        self.renumber(Some(value.into()));
        self
    }

    /// Removes and returns the last value, `None` when empty
    pub fn pop(&mut self) -> Option<Value> {
        let (key, value) = self.items.pop()?;
        let released = match self.next_index {
            Some(next) if next > 0 => Some(next - 1),
            Some(_) => None,
            None => Some(i64::MAX),
        };
        if let Some(index) = released
            && key == Key::Index(index)
        {
            self.next_index = Some(index);
        }
        Some(value)
    }

    /// Removes and returns the first value; integer keys are renumbered from 0
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.items.shift_remove_index(0)?;
        self.renumber(None);
        Some(value)
    }

    /// Removes the entry at `key` if present
    pub fn remove(&mut self, key: impl Into<Key>) -> &mut Self {
        self.offset_unset(key);
        self
    }

    /// Removes the entry at `key` if present
    pub fn offset_unset(&mut self, key: impl Into<Key>) {
        self.items.shift_remove(&key.into());
    }

    /// Removes every entry and resets the next free index
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self.next_index = Some(0);
        self
    }

    /// Replaces values found by loose search.
    ///
    /// `what` and `by` are each a single value or an array. Every value of `what`
    /// is searched in turn; on a hit the matching entry is overwritten with `by`,
    /// or with the entry of `by` at the same key as the searched value (null if
    /// `by` has no such key). Values that are not found are skipped.
    pub fn replace(&mut self, what: impl Into<Value>, by: impl Into<Value>) -> &mut Self {
        let needles = match what.into() {
            Value::Array(items) => items.items,
            single => Entries::from([(Key::Index(0), single)]),
        };
        let by = by.into();

        for (position, needle) in needles {
            let Some(found) = self.find(&needle, false).cloned() else {
                continue;
            };
            let replacement = match &by {
                Value::Array(list) => list.get(&position).cloned().unwrap_or_default(),
                single => single.clone(),
            };
            debug!(key = %found, "replacing value");
            self.set(found, replacement);
        }
        self
    }

    /// Returns a new collection with `other` merged over this one.
    ///
    /// String keys from `other` overwrite; integer keys from both sides are
    /// appended and renumbered from 0. Neither input is modified.
    pub fn merge(&self, other: &Collection) -> Collection {
        trace!(left = self.len(), right = other.len(), "merging collections");
        let mut merged = Collection::with_capacity(self.len() + other.len());
        for (key, value) in self.iter().chain(other.iter()) {
            match key {
                Key::Index(_) => merged.push(value.clone()),
                Key::Name(_) => merged.set(key.clone(), value.clone()),
            };
        }
        merged
    }

    /// Merges `other` into this collection in place.
    pub fn merge_with(&mut self, other: &Collection) -> &mut Self {
        *self = self.merge(other);
        self
    }

    /// Rebuilds the entries with integer keys renumbered from 0, optionally
    /// placing `head` first.
    fn renumber(&mut self, head: Option<Value>) {
        let capacity = self.items.len() + 1;
        let old = std::mem::replace(&mut self.items, Entries::with_capacity(capacity));
        self.next_index = Some(0);
        if let Some(head) = head {
            self.push(head);
        }
        for (key, value) in old {
            match key {
                Key::Index(_) => {
                    self.push(value);
                }
                name => {
                    self.items.insert(name, value);
                }
            }
        }
        trace!(len = self.items.len(), next = ?self.next_index, "renumbered integer keys");
    }

    // ===== EXPORT / INTROSPECTION =====

    /// Borrows the underlying ordered mapping
    pub fn all(&self) -> &Entries {
        &self.items
    }

    /// Copies the underlying ordered mapping
    pub fn to_array(&self) -> Entries {
        self.items.clone()
    }

    /// Consumes the collection, returning its ordered mapping
    pub fn into_entries(self) -> Entries {
        self.items
    }

    /// Encodes as JSON text.
    ///
    /// Fails when nesting exceeds `depth`, when `depth` is 0, or when a float
    /// is NaN or infinite.
    pub fn to_json(&self, options: JsonOptions, depth: usize) -> Result<String> {
        json::encode(self, options, depth)
    }

    /// Encodes as compact JSON with default escaping and depth
    pub fn to_json_string(&self) -> Result<String> {
        self.to_json(JsonOptions::NONE, DEFAULT_JSON_DEPTH)
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the keys are exactly `0..len` in order
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(position, key)| *key == Key::Index(position as i64))
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.items.iter()
    }

    /// Iterates over entries with mutable values
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.items.iter_mut()
    }

    /// Iterates over keys in insertion order
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.items.keys()
    }

    /// Iterates over values in insertion order
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.items.values()
    }

    /// Calls `callback` with every value and key in order
    pub fn each(&self, mut callback: impl FnMut(&Value, &Key)) -> &Self {
        for (key, value) in &self.items {
            callback(value, key);
        }
        self
    }

    // ===== COPY =====

    /// Copies the collection, including every object through its own copy
    /// protocol
    pub fn deep_clone(&self) -> Collection {
        Collection {
            items: deep_copy(&self.items),
            next_index: self.next_index,
        }
    }
}

/// Recursively copies an ordered mapping.
///
/// Nested arrays are copied recursively and objects are copied with
/// [`Object::clone_object`]; scalars are copied by value.
pub fn deep_copy(items: &Entries) -> Entries {
    items
        .iter()
        .map(|(key, value)| {
            let copy = match value {
                Value::Array(nested) => Value::Array(nested.deep_clone()),
                Value::Object(object) => Value::Object(object.deep_clone()),
                scalar => scalar.clone(),
            };
            (key.clone(), copy)
        })
        .collect()
}

impl PartialEq for Collection {
    /// Same entries in the same order
    fn eq(&self, other: &Collection) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl<K: Into<Key>> ops::Index<K> for Collection {
    type Output = Value;

    /// # Panics
    ///
    /// Panics when the key is absent; see [`Collection::offset_get`] for the
    /// fallible form.
    fn index(&self, key: K) -> &Value {
        match self.offset_get(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Arrayable for Collection {
    fn to_array(&self) -> Entries {
        Collection::to_array(self)
    }
}

impl Jsonable for Collection {
    fn to_json(&self, options: JsonOptions, depth: usize) -> Result<String> {
        Collection::to_json(self, options, depth)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl From<Entries> for Collection {
    fn from(items: Entries) -> Self {
        Self::from_entries(items)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Collection {
    fn from(values: Vec<T>) -> Self {
        let mut collection = Collection::with_capacity(values.len());
        for value in values {
            collection.push(value);
        }
        collection
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Collection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut collection = Collection::new();
        collection.extend(iter);
        collection
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut collection = Collection::new();
        for value in iter {
            collection.push(value);
        }
        collection
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Collection {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
