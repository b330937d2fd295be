//! Entry dispatch.
//!
//! [`is`] gives call sites one calling convention for every assertion.
//! Combinators recurse through [`is_at`], so an assertion behaves the same
//! whether it is called directly, through `is`, or nested in another one.

use serde_json::Value;
use tracing::debug;

use crate::assertion::Assertion;
use crate::path::ValuePath;
use crate::AssertionResult;

/// Checks `value` against `assertion`, naming the value `name` in errors.
///
/// Equivalent to `assertion.assert(value, &ValuePath::from(name))`.
///
/// # Example
///
/// ```rust
/// use mustbe::{is, Is};
/// use serde_json::json;
///
/// let ids = is(&json!([1, 2, 3]), &Is::array_of(Is::number()), "ids").unwrap();
/// assert_eq!(ids, vec![1.0, 2.0, 3.0]);
///
/// let err = is(&json!([1, 2, "c"]), &Is::array_of(Is::number()), "arr").unwrap_err();
/// assert_eq!(err.to_string(), "arr[2] must be a number");
/// ```
pub fn is<A>(
    value: &Value,
    assertion: &A,
    name: impl Into<ValuePath>,
) -> AssertionResult<A::Output>
where
    A: Assertion + ?Sized,
{
    let path = name.into();
    let result = is_at(value, assertion, &path);
    if let Err(ref error) = result {
        debug!(root = %path, %error, "assertion failed");
    }
    result
}

/// Checks `value` against `assertion` at an already built path.
pub fn is_at<A>(value: &Value, assertion: &A, path: &ValuePath) -> AssertionResult<A::Output>
where
    A: Assertion + ?Sized,
{
    assertion.assert(value, path)
}
