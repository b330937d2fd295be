//! Homogeneous array assertions.
//!
//! This module provides [`ArrayOf`], which checks that a value is an array
//! and that every element passes an item assertion.

use serde_json::Value;

use crate::dispatch::is_at;
use crate::path::ValuePath;
use crate::AssertionResult;

use super::primitive::ArrayAssertion;
use super::traits::Assertion;

/// An array whose elements all pass `item`.
///
/// Elements are checked in ascending index order at `path[index]`, and the
/// first failing element ends validation. The output is a new `Vec` with one
/// entry per input element, in the same order.
///
/// # Example
///
/// ```rust
/// use mustbe::{is, Is};
/// use serde_json::json;
///
/// let schema = Is::array_of(Is::number());
///
/// assert_eq!(is(&json!([1, 2]), &schema, "arr").unwrap(), vec![1.0, 2.0]);
///
/// let err = is(&json!([1, 2, "c"]), &schema, "arr").unwrap_err();
/// let failure = err.as_assertion().unwrap();
/// assert_eq!(failure.path.to_string(), "arr[2]");
/// assert_eq!(failure.kind, "a number");
/// ```
#[derive(Debug, Clone)]
pub struct ArrayOf<A> {
    item: A,
}

impl<A: Assertion> ArrayOf<A> {
    /// Creates an array assertion with the given item assertion.
    pub fn new(item: A) -> Self {
        Self { item }
    }
}

impl<A: Assertion> Assertion for ArrayOf<A> {
    type Output = Vec<A::Output>;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output> {
        ArrayAssertion
            .elements(value, path)?
            .iter()
            .enumerate()
            .map(|(index, item)| is_at(item, &self.item, &path.index(index)))
            .collect()
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        ArrayAssertion
            .elements(value, path)?
            .iter()
            .enumerate()
            .map(|(index, item)| self.item.assert_to_value(item, &path.index(index)))
            .collect::<AssertionResult<Vec<_>>>()
            .map(Value::Array)
    }
}
