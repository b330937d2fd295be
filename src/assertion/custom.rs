//! Assertions built from closures.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::path::ValuePath;
use crate::AssertionResult;

use super::traits::Assertion;

/// An assertion backed by a closure.
///
/// The closure reports a shape mismatch by returning an
/// [`AssertionError`](crate::AssertionError) and anything else through
/// [`Error::defect`](crate::Error::defect). Custom assertions compose with
/// every combinator like the built-in ones do.
///
/// # Example
///
/// ```rust
/// use mustbe::{is, AssertionError, Is};
/// use serde_json::json;
///
/// let port = Is::custom(|value, path| match value.as_u64() {
///     Some(n) if n <= u64::from(u16::MAX) => Ok(n),
///     _ => Err(AssertionError::new("a port number", path.clone(), value.clone()).into()),
/// });
///
/// let cfg = Is::shape().field("port", port);
/// let err = is(&json!({"port": 70000}), &cfg, "cfg").unwrap_err();
/// assert_eq!(err.to_string(), "cfg.port must be a port number");
/// ```
pub struct FnAssertion<F, T> {
    check: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> FnAssertion<F, T>
where
    F: Fn(&Value, &ValuePath) -> AssertionResult<T> + Send + Sync,
{
    /// Wraps a closure as an assertion.
    pub fn new(check: F) -> Self {
        Self {
            check,
            _output: PhantomData,
        }
    }
}

impl<F: Clone, T> Clone for FnAssertion<F, T> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            _output: PhantomData,
        }
    }
}

impl<F, T> fmt::Debug for FnAssertion<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAssertion")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<F, T> Assertion for FnAssertion<F, T>
where
    F: Fn(&Value, &ValuePath) -> AssertionResult<T> + Send + Sync,
    T: Into<Value>,
{
    type Output = T;

    fn assert(&self, value: &Value, path: &ValuePath) -> AssertionResult<T> {
        (self.check)(value, path)
    }

    fn assert_to_value(&self, value: &Value, path: &ValuePath) -> AssertionResult<Value> {
        self.assert(value, path).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AssertionError, Error};
    use serde_json::json;

    fn even() -> impl Assertion<Output = i64> {
        FnAssertion::new(|value: &Value, path: &ValuePath| match value.as_i64() {
            Some(n) if n % 2 == 0 => Ok(n),
            _ => Err(AssertionError::new("an even integer", path.clone(), value.clone()).into()),
        })
    }

    #[test]
    fn test_custom_success() {
        assert_eq!(even().assert(&json!(4), &ValuePath::named("n")).unwrap(), 4);
    }

    #[test]
    fn test_custom_failure_uses_its_own_kind() {
        let error = even().assert(&json!(3), &ValuePath::named("n")).unwrap_err();
        assert_eq!(error.to_string(), "n must be an even integer");
    }

    #[test]
    fn test_custom_defect_passes_through() {
        let broken = FnAssertion::new(|_: &Value, path: &ValuePath| -> AssertionResult<bool> {
            Err(Error::defect(path, "lookup table missing"))
        });

        let error = broken.assert(&json!(1), &ValuePath::named("x")).unwrap_err();
        assert!(!error.is_assertion());
    }

    #[test]
    fn test_custom_to_value() {
        let out = even().assert_to_value(&json!(8), &ValuePath::named("n")).unwrap();
        assert_eq!(out, json!(8));
    }
}
