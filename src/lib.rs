//! # Mustbe
//!
//! Composable runtime assertions for untyped JSON values. An assertion checks
//! a `serde_json::Value` against a declared expectation and hands it back
//! re-typed, or fails with an error naming the exact path that was wrong.
//!
//! ## Overview
//!
//! Assertions are built once by composing primitives (`boolean`, `number`,
//! `string`, `array`, `object`) with combinators (`array_of`, `object_of`,
//! `shape`, `maybe`, `either`), then applied to as many values as needed.
//! Validation stops at the first violation.
//!
//! ## Core Types
//!
//! - [`Is`]: factory for every built-in assertion
//! - [`is`]: applies an assertion to a value under a root name
//! - [`Assertion`]: implemented by every primitive and combinator
//! - [`ValuePath`]: the location of a value, such as `users[0].email`
//! - [`AssertionError`]: expected kind, path and offending value
//! - [`Error`]: a validation failure or a defect
//!
//! ## Example
//!
//! ```rust
//! use mustbe::{is, Is};
//! use serde_json::json;
//!
//! let user = Is::shape()
//!     .field("id", Is::number())
//!     .field("name", Is::string())
//!     .field("email", Is::maybe(Is::string()));
//!
//! let ok = is(&json!({"id": 1, "name": "Ann"}), &user, "user");
//! assert!(ok.is_ok());
//!
//! let err = is(&json!({"id": "1", "name": "Ann"}), &user, "user").unwrap_err();
//! assert_eq!(err.to_string(), "user.id must be a number");
//! ```

pub mod assertion;
pub mod dispatch;
pub mod error;
pub mod path;

pub use assertion::{
    kind, ArrayAssertion, ArrayOf, Assertion, BooleanAssertion, Choice, Either, FnAssertion, Is,
    Maybe, NumberAssertion, ObjectAssertion, ObjectOf, ShapeAssertion, StringAssertion,
    ValueAssertion,
};
pub use dispatch::{is, is_at};
pub use error::{AssertionError, Error};
pub use path::ValuePath;

/// Result type returned by every assertion.
pub type AssertionResult<T> = Result<T, Error>;
