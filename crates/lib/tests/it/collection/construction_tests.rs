//! Construction tests
//!
//! Covers every source a collection can be built from: native mappings,
//! other collections, array-exporting types, iterables and single values.

use collection::{Arrayable, Collection, Entries, Key, Value};

use crate::helpers::*;

#[test]
fn test_initialize_from_mapping() {
    let mut entries = Entries::new();
    entries.insert(Key::from("foo"), Value::from("bar"));
    entries.insert(Key::from("php"), Value::from("7.0"));

    let collection = Collection::from_entries(entries.clone());

    assert_eq!(collection.all(), &entries);
    assert_eq!(collection.count(), 2);
}

#[test]
fn test_initialize_from_collection() {
    let source = sample_collection();
    let copy = Collection::from_arrayable(&source);

    assert_eq!(copy, source);
    assert_eq!(keys_of(&copy), keys_of(&source));
}

#[test]
fn test_initialize_from_arrayable() {
    struct Pair(&'static str, i64);

    impl Arrayable for Pair {
        fn to_array(&self) -> Entries {
            Collection::from_pairs([(self.0, self.1)]).into_entries()
        }
    }

    let collection = Collection::from_arrayable(&Pair("answer", 42));
    assert_eq!(collection.get("answer"), Some(&Value::Int(42)));
}

#[test]
fn test_initialize_from_iterable_preserves_keys_and_order() {
    let collection: Collection = vec![("b", 2), ("a", 1), ("c", 3)].into_iter().collect();

    assert_eq!(
        keys_of(&collection),
        vec![Key::from("b"), Key::from("a"), Key::from("c")]
    );

    // Later duplicates overwrite in place
    let collection = Collection::from_pairs([("x", 1), ("y", 2), ("x", 3)]);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.first().unwrap(), &Value::Int(3));
}

#[test]
fn test_initialize_from_values_appends() {
    let collection: Collection = vec![Value::from("a"), Value::from("b")].into_iter().collect();
    assert!(collection.is_list());
    assert_eq!(collection.get(1), Some(&Value::from("b")));

    let from_vec = Collection::from(vec![10, 20]);
    assert_eq!(from_vec, list_of(&[10i64, 20]));
}

#[test]
fn test_initialize_from_single_value() {
    assert!(Collection::from_value(Value::Null).is_empty());

    let scalar = Collection::from_value("only");
    assert_eq!(scalar.len(), 1);
    assert_eq!(scalar.get(0), Some(&Value::from("only")));

    let nested = Collection::from_value(Value::from(vec![1, 2]));
    assert_eq!(nested, Collection::from(vec![1, 2]));

    let counter = Counter::new("clicks", 3);
    let from_object = Collection::from_value(counter_value(&counter));
    assert_eq!(from_object.get("label"), Some(&Value::from("clicks")));
    assert_eq!(from_object.get("hits"), Some(&Value::Int(3)));
}

#[test]
fn test_numeric_string_keys_normalize() {
    let collection = Collection::from_pairs([("0", "zero"), ("01", "padded")]);

    assert!(collection.has(0));
    assert!(collection.has("0"));
    assert!(collection.has("01"));
    assert!(!collection.has(1));
}
