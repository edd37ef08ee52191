//! JSON export and import tests

use collection::{Collection, JsonOptions, Jsonable, Value};
use serde::{Deserialize, Serialize};

use crate::helpers::*;

#[test]
fn test_to_json() {
    let collection = sample_collection();
    assert_eq!(collection.to_json_string().unwrap(), r#"{"foo":"bar","php":"7.0"}"#);
}

#[test]
fn test_list_encodes_as_array() {
    let collection = list_of(&[1i64, 2, 3]);
    assert_eq!(collection.to_json_string().unwrap(), "[1,2,3]");

    let mut gapped = list_of(&[1i64, 2, 3]);
    gapped.remove(1);
    assert_eq!(gapped.to_json_string().unwrap(), r#"{"0":1,"2":3}"#);
}

#[test]
fn test_empty_collection() {
    let empty = Collection::new();
    assert_eq!(empty.to_json_string().unwrap(), "[]");
    assert_eq!(empty.to_json(JsonOptions::FORCE_OBJECT, 512).unwrap(), "{}");
}

#[test]
fn test_objects_encode_as_objects() {
    let counter = Counter::new("json", 3);
    let mut collection = Collection::new();
    collection.set("counter", counter_value(&counter));

    assert_eq!(
        collection.to_json_string().unwrap(),
        r#"{"counter":{"label":"json","hits":3}}"#
    );
}

#[test]
fn test_json_round_trip() {
    let mut collection = sample_collection();
    collection
        .set("count", 3)
        .set("enabled", true)
        .set("missing", Value::Null)
        .set("tags", list_of(&["a", "b"]));

    let json = collection.to_json_string().unwrap();
    let decoded = Collection::from_json(&json).unwrap();

    assert_eq!(decoded.to_array(), collection.to_array());
}

#[test]
fn test_json_round_trip_with_floats() {
    let mut collection = Collection::new();
    collection
        .set("whole", 2.0)
        .set("half", 1.5)
        .set("nested", Collection::from(vec![Value::Float(3.0), Value::Int(4)]));

    // Whole floats come back as integers, which are loosely equal
    let decoded = Collection::from_json(&collection.to_json_string().unwrap()).unwrap();
    assert_eq!(decoded.get("whole"), Some(&Value::Int(2)));
    assert_eq!(decoded.get("half"), Some(&Value::Float(1.5)));
    assert!(Value::from(decoded).loose_eq(&Value::from(collection.clone())));

    // Keeping the zero fraction reconstructs the exact values
    let json = collection
        .to_json(JsonOptions::PRESERVE_ZERO_FRACTION, 512)
        .unwrap();
    assert_eq!(json, r#"{"whole":2.0,"half":1.5,"nested":[3.0,4]}"#);
    let exact = Collection::from_json(&json).unwrap();
    assert_eq!(exact.to_array(), collection.to_array());
}

#[test]
fn test_combined_options() {
    let mut collection = Collection::new();
    collection.set("url", "https://example.com/é").set("ratio", 2.0);

    let json = collection
        .to_json(
            JsonOptions::UNESCAPED_SLASHES
                | JsonOptions::UNESCAPED_UNICODE
                | JsonOptions::PRESERVE_ZERO_FRACTION,
            512,
        )
        .unwrap();

    assert_eq!(json, r#"{"url":"https://example.com/é","ratio":2.0}"#);
}

#[test]
fn test_pretty_print_nested() {
    let mut collection = Collection::new();
    collection.set("list", list_of(&[1i64]));

    let json = collection.to_json(JsonOptions::PRETTY_PRINT, 512).unwrap();
    assert_eq!(json, "{\n    \"list\": [\n        1\n    ]\n}");
}

#[test]
fn test_depth_errors() {
    let mut collection = Collection::new();
    collection.set("nested", list_of(&[1i64]));

    let err = collection.to_json(JsonOptions::NONE, 1).unwrap_err();
    assert!(err.is_json_error());
    assert!(collection.to_json(JsonOptions::NONE, 2).is_ok());

    let err = collection.to_json(JsonOptions::NONE, 0).unwrap_err();
    assert!(err.is_json_error());
}

#[test]
fn test_invalid_json_fails() {
    let err = Collection::from_json("{not json").unwrap_err();
    assert!(err.is_json_error());
}

#[test]
fn test_jsonable_trait_object() {
    fn export(value: &dyn Jsonable) -> String {
        value.to_json(JsonOptions::NONE, 512).unwrap()
    }

    assert_eq!(export(&list_of(&["x"])), r#"["x"]"#);
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Document {
    title: String,
    fields: Collection,
}

#[test]
fn test_serde_embedding() {
    let document = Document {
        title: "settings".to_string(),
        fields: sample_collection(),
    };

    let json = serde_json::to_string(&document).unwrap();
    assert_eq!(json, r#"{"title":"settings","fields":{"foo":"bar","php":"7.0"}}"#);

    let decoded: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, document);
}
