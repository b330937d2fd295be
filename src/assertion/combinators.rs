//! Combinators for optional values and unions.
//!
//! - [`Maybe`]: `null` (or an absent field) is accepted as `None`
//! - [`Either`]: the first of two assertions that accepts the value wins
//!
//! # Example
//!
//! ```rust
//! use mustbe::{is, Choice, Is};
//! use serde_json::json;
//!
//! let id = Is::either(Is::number(), Is::string());
//!
//! assert_eq!(is(&json!(7), &id, "id").unwrap(), Choice::Left(7.0));
//! assert_eq!(is(&json!("x7"), &id, "id").unwrap(), Choice::Right("x7".to_string()));
//!
//! let err = is(&json!(true), &id, "id").unwrap_err();
//! assert_eq!(err.to_string(), "id must be a number or a string");
//! ```

use serde_json::Value;
use tracing::trace;

use crate::dispatch::is_at;
use crate::error::{AssertionError, Error};
use crate::path::ValuePath;
use crate::AssertionResult;

use super::traits::Assertion;

/// Accepts `null` or whatever the inner assertion accepts.
///
/// `null` short-circuits to `None` without consulting the inner assertion.
/// Anything else is handed to the inner assertion at the same path.
#[derive(Debug, Clone)]
pub struct Maybe<A> {
    inner: A,
}

impl<A: Assertion> Maybe<A> {
    /// Wraps an assertion so that it also accepts `null`.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: Assertion> Assertion for Maybe<A> {
    type Output = Option<A::Output>;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output> {
        if value.is_null() {
            Ok(None)
        } else {
            is_at(value, &self.inner, path).map(Some)
        }
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        if value.is_null() {
            Ok(Value::Null)
        } else {
            self.inner.assert_to_value(value, path)
        }
    }
}

/// Which branch of an [`Either`] accepted the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice<L, R> {
    /// The first assertion accepted the value.
    Left(L),
    /// The first assertion rejected the value and the second accepted it.
    Right(R),
}

impl<L, R> Choice<L, R> {
    /// Returns true if the first assertion accepted the value.
    pub fn is_left(&self) -> bool {
        matches!(self, Choice::Left(_))
    }

    /// Returns true if the second assertion accepted the value.
    pub fn is_right(&self) -> bool {
        matches!(self, Choice::Right(_))
    }

    /// Returns the first branch's output, if it won.
    pub fn left(self) -> Option<L> {
        match self {
            Choice::Left(l) => Some(l),
            Choice::Right(_) => None,
        }
    }

    /// Returns the second branch's output, if it won.
    pub fn right(self) -> Option<R> {
        match self {
            Choice::Left(_) => None,
            Choice::Right(r) => Some(r),
        }
    }
}

impl<T> Choice<T, T> {
    /// Collapses a choice between two outputs of the same type.
    pub fn into_inner(self) -> T {
        match self {
            Choice::Left(t) | Choice::Right(t) => t,
        }
    }
}

/// Accepts what `first` accepts, or else what `second` accepts.
///
/// `first` is always tried first and wins whenever it succeeds. When both
/// reject the value, the reported kind is `"{first} or {second}"` at the
/// shared path. Defects are never caught: one raised by `first` returns
/// immediately, and one raised by `second` is returned unchanged rather than
/// being merged into a validation failure.
#[derive(Debug, Clone)]
pub struct Either<A, B> {
    first: A,
    second: B,
}

impl<A: Assertion, B: Assertion> Either<A, B> {
    /// Creates a union of two assertions.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    fn resolve<L, R>(
        value: &Value,
        path: &ValuePath,
        first: impl FnOnce() -> AssertionResult<L>,
        second: impl FnOnce() -> AssertionResult<R>,
    ) -> AssertionResult<Choice<L, R>> {
        let first_failure = match first() {
            Ok(out) => return Ok(Choice::Left(out)),
            Err(Error::Assertion(failure)) => failure,
            Err(defect) => return Err(defect),
        };
        trace!(%path, kind = %first_failure.kind, "first branch rejected value, trying second");

        match second() {
            Ok(out) => Ok(Choice::Right(out)),
            Err(Error::Assertion(second_failure)) => {
                let merged = AssertionError::either(&first_failure, &second_failure, path, value);
                trace!(%path, kind = %merged.kind, "both branches rejected value");
                Err(merged.into())
            }
            Err(defect) => Err(defect),
        }
    }
}

impl<A: Assertion, B: Assertion> Assertion for Either<A, B> {
    type Output = Choice<A::Output, B::Output>;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<Self::Output> {
        Self::resolve(
            value,
            path,
            || is_at(value, &self.first, path),
            || is_at(value, &self.second, path),
        )
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        Self::resolve(
            value,
            path,
            || self.first.assert_to_value(value, path),
            || self.second.assert_to_value(value, path),
        )
        .map(Choice::into_inner)
    }
}
