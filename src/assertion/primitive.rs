//! Primitive assertions.
//!
//! Each primitive accepts exactly one JSON kind. None of them coerce: the
//! string `"1"` is not a number and `null` is not an object.

use serde_json::{Map, Value};

use crate::error::AssertionError;
use crate::path::ValuePath;
use crate::AssertionResult;

use super::traits::Assertion;

/// Expected-kind descriptions reported by the primitives.
pub mod kind {
    pub const BOOLEAN: &str = "a boolean";
    pub const NUMBER: &str = "a number";
    pub const STRING: &str = "a string";
    pub const ARRAY: &str = "an array";
    pub const OBJECT: &str = "an object";
}

fn mismatch(kind: &str, path: &ValuePath, value: &Value) -> crate::Error {
    AssertionError::new(kind, path.clone(), value.clone()).into()
}

/// Accepts only booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanAssertion;

impl Assertion for BooleanAssertion {
    type Output = bool;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<bool> {
        value
            .as_bool()
            .ok_or_else(|| mismatch(kind::BOOLEAN, path, value))
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        self.assert(value, path).map(Value::Bool)
    }
}

/// Accepts any number, integer or float, with no range check.
///
/// The output is an `f64`. [`Assertion::assert_to_value`] hands the number
/// back untouched, so `1` stays an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberAssertion;

impl Assertion for NumberAssertion {
    type Output = f64;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<f64> {
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| mismatch(kind::NUMBER, path, value)),
            _ => Err(mismatch(kind::NUMBER, path, value)),
        }
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        match value {
            Value::Number(_) => Ok(value.clone()),
            _ => Err(mismatch(kind::NUMBER, path, value)),
        }
    }
}

/// Accepts only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringAssertion;

impl Assertion for StringAssertion {
    type Output = String;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<String> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch(kind::STRING, path, value))
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        self.assert(value, path).map(Value::String)
    }
}

/// Accepts any array, without looking at its elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayAssertion;

impl ArrayAssertion {
    /// Borrows the elements of an array, or fails with "an array".
    pub(crate) fn elements<'v>(
        &self,
        value: &'v Value,
        path: &ValuePath,
    ) -> AssertionResult<&'v Vec<Value>> {
        value
            .as_array()
            .ok_or_else(|| mismatch(kind::ARRAY, path, value))
    }
}

impl Assertion for ArrayAssertion {
    type Output = Vec<Value>;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Vec<Value>> {
        self.elements(value, path).cloned()
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        self.assert(value, path).map(Value::Array)
    }
}

/// Accepts a plain key-value mapping.
///
/// `null` and arrays are rejected explicitly; neither counts as an object.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectAssertion;

impl ObjectAssertion {
    /// Borrows the entries of an object, or fails with "an object".
    pub(crate) fn entries<'v>(
        &self,
        value: &'v Value,
        path: &ValuePath,
    ) -> AssertionResult<&'v Map<String, Value>> {
        value
            .as_object()
            .ok_or_else(|| mismatch(kind::OBJECT, path, value))
    }
}

impl Assertion for ObjectAssertion {
    type Output = Map<String, Value>;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Map<String, Value>> {
        self.entries(value, path).cloned()
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        self.assert(value, path).map(Value::Object)
    }
}
