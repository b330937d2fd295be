//! Traits for assertion polymorphism.
//!
//! [`Assertion`] is implemented by every primitive and combinator so that
//! assertions of different kinds can be nested inside one another.
//! [`ValueAssertion`] erases the output type for places that store
//! heterogeneous assertions side by side.

use std::sync::Arc;

use serde_json::Value;

use crate::path::ValuePath;
use crate::AssertionResult;

/// A reusable check that re-types a JSON value or reports where it went wrong.
///
/// Implementations must not hold mutable state: the same assertion is applied
/// to many values, possibly from several threads at once.
///
/// # Example
///
/// ```rust
/// use mustbe::{Assertion, Is, ValuePath};
/// use serde_json::json;
///
/// let tags = Is::array_of(Is::string());
///
/// let out: Vec<String> = tags.assert(&json!(["a", "b"]), &ValuePath::named("tags")).unwrap();
/// assert_eq!(out, vec!["a".to_string(), "b".to_string()]);
/// ```
pub trait Assertion: Send + Sync {
    /// The type a successfully checked value is re-typed as.
    type Output;

    /// Checks `value`, naming it `path` in any error.
    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output>;

    /// Checks `value` and returns the result as a `serde_json::Value`.
    ///
    /// Lets assertions with different output types sit together in a shape.
    /// Scalars come back exactly as given, containers are rebuilt.
    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value>;
}

/// A type-erased assertion that produces a `serde_json::Value`.
///
/// Every [`Assertion`] is a `ValueAssertion` through a blanket impl.
pub trait ValueAssertion: Send + Sync {
    /// Checks `value` and returns the result as a `serde_json::Value`.
    fn assert_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value>;
}

impl<A: Assertion> ValueAssertion for A {
    fn assert_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        self.assert_to_value(value, path)
    }
}

impl<A: Assertion + ?Sized> Assertion for Arc<A> {
    type Output = A::Output;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output> {
        (**self).assert(value, path)
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        (**self).assert_to_value(value, path)
    }
}

impl<A: Assertion + ?Sized> Assertion for Box<A> {
    type Output = A::Output;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output> {
        (**self).assert(value, path)
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        (**self).assert_to_value(value, path)
    }
}
