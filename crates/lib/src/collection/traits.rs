//! Export capabilities implemented by [`Collection`](super::Collection).
//!
//! - `Arrayable`: the value can be exported as an ordered key/value mapping
//! - `Jsonable`: the value can be exported as JSON text

use super::{Entries, JsonOptions};
use crate::Result;

/// Types that can export themselves as an ordered mapping.
///
/// Any `Arrayable` can seed a new collection through
/// [`Collection::from_arrayable`](super::Collection::from_arrayable).
///
/// # Examples
///
/// ```
/// use collection::{Arrayable, Collection, Entries, Key, Value};
///
/// struct Settings {
///     theme: String,
/// }
///
/// impl Arrayable for Settings {
///     fn to_array(&self) -> Entries {
///         let mut entries = Entries::new();
///         entries.insert(Key::from("theme"), Value::from(self.theme.as_str()));
///         entries
///     }
/// }
///
/// let settings = Settings { theme: "dark".to_string() };
/// let collection = Collection::from_arrayable(&settings);
/// assert_eq!(collection.get("theme"), Some(&Value::from("dark")));
/// ```
pub trait Arrayable {
    /// Export as an ordered mapping.
    fn to_array(&self) -> Entries;
}

/// Types that can export themselves as JSON text.
pub trait Jsonable {
    /// Encode as JSON with the given options and maximum nesting depth.
    fn to_json(&self, options: JsonOptions, depth: usize) -> Result<String>;
}
