//! Integration tests for ValuePath.

use mustbe::{is, Is, ValuePath};
use serde_json::json;

#[test]
fn test_nested_failure_paths() {
    let address = Is::shape().field("city", Is::string());
    let schema = Is::array_of(Is::shape().field("address", address));
    let value = json!([{"address": {"city": "x"}}, {"address": {"city": 7}}]);

    let err = is(&value, &schema, "users").unwrap_err();
    assert_eq!(err.to_string(), "users[1].address.city must be a string");
}

#[test]
fn test_root_name_is_used_verbatim() {
    let err = is(&json!([true]), &Is::array_of(Is::number()), "body.items").unwrap_err();
    assert_eq!(err.to_string(), "body.items[0] must be a number");
}

#[test]
fn test_empty_root_name() {
    let err = is(&json!({"a": 1}), &Is::object_of(Is::string()), "").unwrap_err();
    assert_eq!(err.to_string(), ".a must be a string");
}

#[test]
fn test_path_does_not_affect_outcome() {
    let schema = Is::shape().field("n", Is::number());
    let value = json!({"n": 1});

    for name in ["", "x", "a.b[0]", "with space"] {
        assert!(is(&value, &schema, name).is_ok());
    }
}

#[test]
fn test_keys_with_dots_are_not_split() {
    let err = is(&json!({"a.b": 1}), &Is::object_of(Is::string()), "o").unwrap_err();
    let failure = err.as_assertion().unwrap();

    assert_eq!(failure.path.to_string(), "o.a.b");
    assert_eq!(failure.path, ValuePath::named("o").field("a.b"));
}
