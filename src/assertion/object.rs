//! Object assertions.
//!
//! This module provides [`ObjectOf`] for maps whose values all share one
//! assertion, and [`ShapeAssertion`] for records with a fixed set of
//! declared fields.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::dispatch::is_at;
use crate::path::ValuePath;
use crate::AssertionResult;

use super::primitive::ObjectAssertion;
use super::traits::{Assertion, ValueAssertion};

static ABSENT: Value = Value::Null;

/// An object whose values all pass `value_assertion`.
///
/// Keys are visited in the input's own order, each value checked at
/// `path.key`. The output holds the same keys as the input.
///
/// # Example
///
/// ```rust
/// use mustbe::{is, Is};
/// use serde_json::json;
///
/// let scores = Is::object_of(Is::number());
///
/// let out = is(&json!({"ann": 3, "bob": 4}), &scores, "scores").unwrap();
/// assert_eq!(out["bob"], 4.0);
///
/// let err = is(&json!({"a": "x", "b": 2}), &Is::object_of(Is::string()), "o").unwrap_err();
/// assert_eq!(err.to_string(), "o.b must be a string");
/// ```
#[derive(Debug, Clone)]
pub struct ObjectOf<A> {
    value_assertion: A,
}

impl<A: Assertion> ObjectOf<A> {
    /// Creates an object assertion with the given value assertion.
    pub fn new(value_assertion: A) -> Self {
        Self { value_assertion }
    }
}

impl<A: Assertion> Assertion for ObjectOf<A> {
    type Output = IndexMap<String, A::Output>;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output> {
        ObjectAssertion
            .entries(value, path)?
            .iter()
            .map(|(key, item)| {
                is_at(item, &self.value_assertion, &path.field(key)).map(|v| (key.clone(), v))
            })
            .collect()
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        ObjectAssertion
            .entries(value, path)?
            .iter()
            .map(|(key, item)| {
                self.value_assertion
                    .assert_to_value(item, &path.field(key))
                    .map(|v| (key.clone(), v))
            })
            .collect::<AssertionResult<Map<_, _>>>()
            .map(Value::Object)
    }
}

/// A record with a fixed, ordered set of declared fields.
///
/// Fields are checked in declaration order at `path.field`. The output holds
/// exactly the declared fields: input fields that were not declared are
/// dropped, and declared fields missing from the input are checked as `null`
/// (only a [`Maybe`](super::Maybe) field accepts that).
///
/// # Example
///
/// ```rust
/// use mustbe::{is, Is};
/// use serde_json::json;
///
/// let user = Is::shape()
///     .field("id", Is::number())
///     .field("name", Is::string())
///     .field("tag", Is::maybe(Is::string()));
///
/// let out = is(&json!({"id": 1, "name": "n", "extra": true}), &user, "s").unwrap();
/// assert_eq!(serde_json::Value::Object(out), json!({"id": 1, "name": "n", "tag": null}));
///
/// let err = is(&json!({"id": 1}), &user, "s").unwrap_err();
/// assert_eq!(err.to_string(), "s.name must be a string");
/// ```
#[derive(Default)]
pub struct ShapeAssertion {
    fields: IndexMap<String, Box<dyn ValueAssertion>>,
}

impl ShapeAssertion {
    /// Creates a shape with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// Declaring a name twice replaces the earlier assertion but keeps the
    /// field's original position.
    pub fn field<A>(mut self, name: impl Into<String>, assertion: A) -> Self
    where
        A: Assertion + 'static,
    {
        self.fields.insert(name.into(), Box::new(assertion));
        self
    }

    /// Returns the declared field names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Debug for ShapeAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeAssertion")
            .field("fields", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Assertion for ShapeAssertion {
    type Output = Map<String, Value>;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output> {
        let entries = ObjectAssertion.entries(value, path)?;
        let mut validated = Map::new();

        for (name, assertion) in &self.fields {
            let field_value = entries.get(name).unwrap_or(&ABSENT);
            let checked = assertion.assert_value(field_value, &path.field(name))?;
            validated.insert(name.clone(), checked);
        }

        Ok(validated)
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        self.assert(value, path).map(Value::Object)
    }
}

impl<K, A> FromIterator<(K, A)> for ShapeAssertion
where
    K: Into<String>,
    A: Assertion + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |shape, (name, assertion)| shape.field(name, assertion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{BooleanAssertion, Maybe, NumberAssertion, StringAssertion};
    use serde_json::json;

    #[test]
    fn test_object_of_keeps_input_key_order() {
        let schema = ObjectOf::new(NumberAssertion);
        let out = schema
            .assert(&json!({"z": 1, "a": 2, "m": 3}), &ValuePath::named("o"))
            .unwrap();

        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_object_of_rejects_arrays() {
        let schema = ObjectOf::new(NumberAssertion);
        let error = schema.assert(&json!([1]), &ValuePath::named("o")).unwrap_err();
        assert_eq!(error.to_string(), "o must be an object");
    }

    #[test]
    fn test_object_of_empty_object() {
        let schema = ObjectOf::new(StringAssertion);
        assert!(schema.assert(&json!({}), &ValuePath::named("o")).unwrap().is_empty());
    }

    #[test]
    fn test_shape_reports_fields_in_declared_order() {
        let schema = ShapeAssertion::new()
            .field("b", NumberAssertion)
            .field("a", NumberAssertion);

        // Both fields are wrong; the first declared one is reported.
        let error = schema
            .assert(&json!({"a": "x", "b": "y"}), &ValuePath::named("s"))
            .unwrap_err();
        assert_eq!(error.path().to_string(), "s.b");
    }

    #[test]
    fn test_shape_output_follows_declared_order() {
        let schema = ShapeAssertion::new()
            .field("second", NumberAssertion)
            .field("first", NumberAssertion);

        let out = schema
            .assert(&json!({"first": 1, "second": 2}), &ValuePath::named("s"))
            .unwrap();
        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["second", "first"]);
    }

    #[test]
    fn test_shape_missing_field_is_checked_as_null() {
        let schema = ShapeAssertion::new().field("flag", BooleanAssertion);
        let error = schema
            .assert(&json!({}), &ValuePath::named("s"))
            .unwrap_err()
            .into_assertion()
            .unwrap();

        assert_eq!(error.kind, "a boolean");
        assert_eq!(error.value, Value::Null);
    }

    #[test]
    fn test_shape_redeclared_field_keeps_position() {
        let schema = ShapeAssertion::new()
            .field("a", NumberAssertion)
            .field("b", NumberAssertion)
            .field("a", Maybe::new(StringAssertion));

        let keys: Vec<_> = schema.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(schema.assert(&json!({"b": 1}), &ValuePath::named("s")).is_ok());
    }

    #[test]
    fn test_empty_shape_still_requires_object() {
        let schema = ShapeAssertion::new();
        assert_eq!(
            schema.assert(&json!({"x": 1}), &ValuePath::named("s")).unwrap(),
            Map::new()
        );
        assert!(schema.assert(&Value::Null, &ValuePath::named("s")).is_err());
    }

    #[test]
    fn test_shape_from_iterator() {
        let schema: ShapeAssertion = vec![("x", NumberAssertion), ("y", NumberAssertion)]
            .into_iter()
            .collect();
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_shape_debug_lists_fields() {
        let schema = ShapeAssertion::new()
            .field("id", NumberAssertion)
            .field("tags", BooleanAssertion);
        assert_eq!(
            format!("{:?}", schema),
            r#"ShapeAssertion { fields: ["id", "tags"] }"#
        );
    }
}
