//! Lookup and introspection tests
//!
//! Covers has/get/offset_get, first/last, counting, iteration and `each`.

use collection::{Collection, Key, Value};

use crate::helpers::*;

#[test]
fn test_has_checks_existence_not_truthiness() {
    let mut collection = Collection::new();
    collection.set("foo", "bar").set("nothing", Value::Null).set("zero", 0);

    assert!(collection.has("foo"));
    assert!(collection.has("nothing"));
    assert!(collection.has("zero"));
    assert!(!collection.has("bar"));
    assert!(collection.offset_exists("foo"));
}

#[test]
fn test_get_missing_key_is_none() {
    let collection = sample_collection();

    assert_eq!(collection.get("foo"), Some(&Value::from("bar")));
    assert!(collection.get("bar").is_none());
    assert!(collection.get(0).is_none());
}

#[test]
fn test_offset_get_is_strict() {
    let collection = sample_collection();

    assert_eq!(collection.offset_get("foo").unwrap(), "bar");

    let err = collection.offset_get("missing").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "collection");
    assert_eq!(err.to_string(), "Undefined array key \"missing\"");
}

#[test]
fn test_index_operator() {
    let collection = sample_collection();
    assert_eq!(collection["php"], "7.0");
}

#[test]
#[should_panic(expected = "Undefined array key")]
fn test_index_operator_panics_on_missing_key() {
    let collection = sample_collection();
    let _ = &collection["missing"];
}

#[test]
fn test_first_and_last() {
    let collection = list_of(&["foo", "bar"]);

    assert_eq!(collection.first().unwrap(), "foo");
    assert_eq!(collection.last(), Some(&Value::from("bar")));
}

#[test]
fn test_first_and_last_on_empty_collection() {
    let collection = Collection::new();

    let err = collection.first().unwrap_err();
    assert!(err.is_empty_error());
    assert!(collection.last().is_none());
}

#[test]
fn test_first_follows_iteration_order_not_keys() {
    let mut collection = Collection::new();
    collection.set(5, "five").set(1, "one");

    assert_eq!(collection.first().unwrap(), "five");
    assert_eq!(collection.last(), Some(&Value::from("one")));
}

#[test]
fn test_count_and_is_empty() {
    let mut collection = sample_collection();
    assert_eq!(collection.count(), 2);
    assert_eq!(collection.len(), 2);
    assert!(!collection.is_empty());

    collection.clear();
    assert_eq!(collection.count(), 0);
    assert!(collection.is_empty());
}

#[test]
fn test_iteration_in_insertion_order() {
    let mut collection = Collection::new();
    collection.set("z", 1).push("pushed").set("a", 2);

    let pairs: Vec<(Key, Value)> = collection
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Key::from("z"), Value::Int(1)),
            (Key::Index(0), Value::from("pushed")),
            (Key::from("a"), Value::Int(2)),
        ]
    );

    // A second pass yields the same entries
    assert_eq!((&collection).into_iter().count(), 3);
    let owned: Vec<_> = collection.into_iter().map(|(key, _)| key).collect();
    assert_eq!(owned.len(), 3);
}

#[test]
fn test_each_visits_value_then_key() {
    let collection = sample_collection();
    let mut seen = Vec::new();

    let returned = collection.each(|value, key| seen.push(format!("{key}={value}")));

    assert_eq!(seen, vec!["foo=bar", "php=7.0"]);
    assert_eq!(returned.count(), 2);
}

#[test]
fn test_all_and_to_array() {
    let collection = list_of(&["foo", "bar"]);

    let expected = Collection::from_pairs([(0, "foo"), (1, "bar")]).into_entries();
    assert_eq!(collection.all(), &expected);
    assert_eq!(collection.to_array(), expected);
}
