//! JSON export and import for collections.
//!
//! Encoding follows the conventions of a native associative-array JSON encoder:
//!
//! - a collection whose keys run `0..n` in order encodes as a JSON array, any
//!   other key shape as a JSON object
//! - objects encode as JSON objects of their properties
//! - `/` is escaped as `\/` and non-ASCII characters as `\uXXXX` unless the
//!   matching [`JsonOptions`] flag is set
//! - floats with a zero fraction print without the fraction unless
//!   [`JsonOptions::PRESERVE_ZERO_FRACTION`] is set
//!
//! The same shape rules drive the `serde` implementations of [`Collection`] and
//! [`Value`], so collections can be embedded in any serde-based format.

use std::{fmt::Write as _, ops};

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};

use super::{Collection, CollectionError, Key, Value};
use crate::Result;

/// Flag set controlling JSON output.
///
/// Flags combine with `|`:
///
/// ```
/// use collection::{Collection, JsonOptions, constants::DEFAULT_JSON_DEPTH};
///
/// let collection = Collection::from_pairs([("url", "a/b")]);
/// let options = JsonOptions::PRETTY_PRINT | JsonOptions::UNESCAPED_SLASHES;
/// let json = collection.to_json(options, DEFAULT_JSON_DEPTH).unwrap();
/// assert_eq!(json, "{\n    \"url\": \"a/b\"\n}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JsonOptions(u32);

impl JsonOptions {
    /// No flags: compact output with default escaping
    pub const NONE: JsonOptions = JsonOptions(0);
    /// Indent nested structures by four spaces, one entry per line
    pub const PRETTY_PRINT: JsonOptions = JsonOptions(1 << 0);
    /// Leave `/` unescaped
    pub const UNESCAPED_SLASHES: JsonOptions = JsonOptions(1 << 1);
    /// Emit non-ASCII characters as UTF-8 instead of `\uXXXX`
    pub const UNESCAPED_UNICODE: JsonOptions = JsonOptions(1 << 2);
    /// Encode list-shaped collections as objects too
    pub const FORCE_OBJECT: JsonOptions = JsonOptions(1 << 3);
    /// Keep the `.0` of floats with a zero fraction
    pub const PRESERVE_ZERO_FRACTION: JsonOptions = JsonOptions(1 << 4);

    /// Builds a flag set from raw bits; unknown bits are kept but ignored.
    pub const fn from_bits(bits: u32) -> Self {
        JsonOptions(bits)
    }

    /// Raw bits of this flag set.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every flag in `other` is set.
    pub const fn contains(self, other: JsonOptions) -> bool {
        self.0 & other.0 == other.0
    }
}

impl ops::BitOr for JsonOptions {
    type Output = JsonOptions;

    fn bitor(self, rhs: JsonOptions) -> JsonOptions {
        JsonOptions(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for JsonOptions {
    fn bitor_assign(&mut self, rhs: JsonOptions) {
        self.0 |= rhs.0;
    }
}

/// Encodes a collection as JSON text.
pub(crate) fn encode(items: &Collection, options: JsonOptions, depth: usize) -> Result<String> {
    if depth == 0 {
        return Err(CollectionError::InvalidDepth.into());
    }

    let encoder = Encoder { options, depth };
    let tree = encoder.collection(items, 1, options.contains(JsonOptions::FORCE_OBJECT))?;

    let raw = if options.contains(JsonOptions::PRETTY_PRINT) {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        tree.serialize(&mut serializer)?;
        String::from_utf8_lossy(&buf).into_owned()
    } else {
        serde_json::to_string(&tree)?
    };

    Ok(escape(&raw, options))
}

/// Decodes JSON text into a collection.
pub(crate) fn decode(text: &str) -> Result<Collection> {
    let tree: serde_json::Value =
        serde_json::from_str(text).map_err(|e| CollectionError::DecodeFailed {
            reason: e.to_string(),
        })?;
    Ok(Collection::from_value(Value::from(tree)))
}

struct Encoder {
    options: JsonOptions,
    depth: usize,
}

impl Encoder {
    fn collection(
        &self,
        items: &Collection,
        level: usize,
        as_object: bool,
    ) -> Result<serde_json::Value> {
        if level > self.depth {
            tracing::debug!(depth = self.depth, "JSON nesting limit reached");
            return Err(CollectionError::DepthExceeded { depth: self.depth }.into());
        }

        let force_object = self.options.contains(JsonOptions::FORCE_OBJECT);
        if !as_object && items.is_list() {
            let values = items
                .values()
                .map(|value| self.value(value, level, force_object))
                .collect::<Result<Vec<_>>>()?;
            return Ok(serde_json::Value::Array(values));
        }

        let mut map = serde_json::Map::with_capacity(items.len());
        for (key, value) in items {
            map.insert(key.to_string(), self.value(value, level, force_object)?);
        }
        Ok(serde_json::Value::Object(map))
    }

    fn value(&self, value: &Value, level: usize, force_object: bool) -> Result<serde_json::Value> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(f) => self.float(*f)?,
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => self.collection(items, level + 1, force_object)?,
            Value::Object(object) => self.collection(&object.properties(), level + 1, true)?,
        })
    }

    fn float(&self, f: f64) -> Result<serde_json::Value> {
        // Whole floats within the exactly representable range print as integers;
        // negative zero keeps its sign
        const EXACT: f64 = 9_007_199_254_740_992.0;

        if !self.options.contains(JsonOptions::PRESERVE_ZERO_FRACTION)
            && f.fract() == 0.0
            && f.abs() < EXACT
            && !(f == 0.0 && f.is_sign_negative())
        {
            return Ok(serde_json::Value::from(f as i64));
        }
        serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| CollectionError::NonFiniteNumber { value: f }.into())
    }
}

/// Applies slash and unicode escaping to serialized JSON.
///
/// Both characters can only occur inside string literals of the output.
fn escape(raw: &str, options: JsonOptions) -> String {
    let escape_slashes = !options.contains(JsonOptions::UNESCAPED_SLASHES);
    let escape_unicode = !options.contains(JsonOptions::UNESCAPED_UNICODE);
    if !escape_slashes && !escape_unicode {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '/' && escape_slashes {
            out.push_str("\\/");
        } else if !c.is_ascii() && escape_unicode {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Array(
                map.into_iter()
                    .map(|(key, value)| (Key::from(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Serializes a collection as a map regardless of its key shape.
struct AsMap<'a>(&'a Collection);

impl Serialize for AsMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            serializer.collect_seq(self.values())
        } else {
            AsMap(self).serialize(serializer)
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(object) => AsMap(&object.properties()).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Collection::from_value)
    }
}
