//! Assertion failure types.
//!
//! This module provides [`AssertionError`], the single kind of validation
//! failure, and [`Error`], which keeps validation failures apart from defects
//! that have nothing to do with the shape of the input.

use std::error::Error as StdError;
use std::fmt::{self, Display};

use serde_json::Value;

use crate::path::ValuePath;

/// A value did not have the expected shape.
///
/// `AssertionError` captures:
/// - **kind**: a description of what was expected (`"a number"`, `"a number or a string"`)
/// - **path**: where in the input the offending value lives
/// - **value**: the offending value itself
///
/// # Example
///
/// ```rust
/// use mustbe::{AssertionError, ValuePath};
/// use serde_json::json;
///
/// let error = AssertionError::new("a number", ValuePath::named("age"), json!("ten"));
///
/// assert_eq!(error.to_string(), "age must be a number");
/// assert_eq!(error.value, json!("ten"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionError {
    /// Description of the expected kind.
    pub kind: String,
    /// The path to the value that failed.
    pub path: ValuePath,
    /// The value that failed, as received.
    pub value: Value,
}

impl AssertionError {
    /// Creates a new assertion error.
    pub fn new(kind: impl Into<String>, path: ValuePath, value: Value) -> Self {
        Self {
            kind: kind.into(),
            path,
            value,
        }
    }

    /// Builds the error `either` reports when both of its branches fail.
    pub(crate) fn either(
        first: &AssertionError,
        second: &AssertionError,
        path: &ValuePath,
        value: &Value,
    ) -> Self {
        Self::new(
            format!("{} or {}", first.kind, second.kind),
            path.clone(),
            value.clone(),
        )
    }
}

impl Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must be {}", self.path, self.kind)
    }
}

impl StdError for AssertionError {}

/// Errors produced while running an assertion.
///
/// Only [`Error::Assertion`] is a validation failure. [`Error::Defect`] marks
/// a failure unrelated to shape checking (for example a custom assertion that
/// hit a bug); combinators never catch or re-label it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input did not have the expected shape.
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// Something other than a shape mismatch went wrong.
    #[error("defect at {path}: {source}")]
    Defect {
        path: ValuePath,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    /// Creates a defect error at the given path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mustbe::{Error, ValuePath};
    ///
    /// let error = Error::defect(&ValuePath::named("config"), "lookup table missing");
    /// assert!(!error.is_assertion());
    /// assert_eq!(error.to_string(), "defect at config: lookup table missing");
    /// ```
    pub fn defect(path: &ValuePath, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Error::Defect {
            path: path.clone(),
            source: source.into(),
        }
    }

    /// Returns true if this error is a validation failure.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Error::Assertion(_))
    }

    /// Returns the validation failure, if this is one.
    pub fn as_assertion(&self) -> Option<&AssertionError> {
        match self {
            Error::Assertion(e) => Some(e),
            Error::Defect { .. } => None,
        }
    }

    /// Converts into the validation failure, handing defects back unchanged.
    pub fn into_assertion(self) -> Result<AssertionError, Error> {
        match self {
            Error::Assertion(e) => Ok(e),
            other => Err(other),
        }
    }

    /// Returns the path at which the error was raised.
    pub fn path(&self) -> &ValuePath {
        match self {
            Error::Assertion(e) => &e.path,
            Error::Defect { path, .. } => path,
        }
    }
}

// Assertion trees are shared across threads, so their errors must be too.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<AssertionError>();
    assert_sync::<AssertionError>();
    assert_send::<Error>();
    assert_sync::<Error>();
};
