use std::{cell::Cell, rc::Rc};

use collection::{Collection, Key, Object, ObjectRef, Value};

// ==========================
// SHARED TEST FIXTURES
// ==========================

/// Collection holding `{"foo": "bar", "php": "7.0"}`
pub fn sample_collection() -> Collection {
    Collection::from_pairs([("foo", "bar"), ("php", "7.0")])
}

/// Collection built by pushing the given values in order
pub fn list_of<V: Into<Value> + Clone>(values: &[V]) -> Collection {
    let mut collection = Collection::new();
    for value in values {
        collection.push(value.clone());
    }
    collection
}

/// Keys of a collection in iteration order
pub fn keys_of(collection: &Collection) -> Vec<Key> {
    collection.keys().cloned().collect()
}

/// A mutable object used to observe copy semantics.
#[derive(Debug)]
pub struct Counter {
    pub label: String,
    pub hits: Cell<i64>,
}

impl Counter {
    pub fn new(label: &str, hits: i64) -> Rc<Counter> {
        Rc::new(Counter {
            label: label.to_string(),
            hits: Cell::new(hits),
        })
    }

    pub fn bump(&self) {
        self.hits.set(self.hits.get() + 1);
    }
}

impl Object for Counter {
    fn class_name(&self) -> &str {
        "Counter"
    }

    fn properties(&self) -> Collection {
        let mut properties = Collection::new();
        properties
            .set("label", self.label.as_str())
            .set("hits", self.hits.get());
        properties
    }

    fn clone_object(&self) -> ObjectRef {
        ObjectRef::new(Counter {
            label: self.label.clone(),
            hits: Cell::new(self.hits.get()),
        })
    }
}

/// Wraps a shared counter in an object value
pub fn counter_value(counter: &Rc<Counter>) -> Value {
    Value::Object(ObjectRef::from(Rc::clone(counter)))
}

/// Reads the `hits` property of an object value
pub fn hits_of(value: &Value) -> Option<i64> {
    value
        .as_object()
        .and_then(|object| object.properties().get("hits").and_then(Value::as_int))
}
