//! Assertion definitions.
//!
//! Primitives check a single JSON kind. Combinators build new assertions out
//! of existing ones and extend the path as they descend. All of them stop at
//! the first violation.
//!
//! # Example
//!
//! ```rust
//! use mustbe::{is, Is};
//! use serde_json::json;
//!
//! let post = Is::shape()
//!     .field("title", Is::string())
//!     .field("tags", Is::array_of(Is::string()))
//!     .field("meta", Is::object_of(Is::either(Is::number(), Is::string())));
//!
//! let err = is(&json!({
//!     "title": "hello",
//!     "tags": ["a", 1],
//!     "meta": {}
//! }), &post, "post").unwrap_err();
//!
//! assert_eq!(err.to_string(), "post.tags[1] must be a string");
//! ```

mod array;
mod combinators;
mod custom;
mod object;
mod primitive;
mod traits;

pub use array::ArrayOf;
pub use combinators::{Choice, Either, Maybe};
pub use custom::FnAssertion;
pub use object::{ObjectOf, ShapeAssertion};
pub use primitive::{
    kind, ArrayAssertion, BooleanAssertion, NumberAssertion, ObjectAssertion, StringAssertion,
};
pub use traits::{Assertion, ValueAssertion};

use serde_json::Value;

use crate::path::ValuePath;
use crate::AssertionResult;

/// Entry point for building assertions.
///
/// # Example
///
/// ```rust
/// use mustbe::{is, Is};
/// use serde_json::json;
///
/// let item = Is::shape()
///     .field("id", Is::number())
///     .field("tag", Is::maybe(Is::string()));
///
/// let out = is(&json!({"id": 1}), &item, "s").unwrap();
/// assert_eq!(out["tag"], serde_json::Value::Null);
/// ```
pub struct Is;

impl Is {
    /// Accepts only booleans; fails with "a boolean".
    pub fn boolean() -> BooleanAssertion {
        BooleanAssertion
    }

    /// Accepts any number; fails with "a number".
    pub fn number() -> NumberAssertion {
        NumberAssertion
    }

    /// Accepts only strings; fails with "a string".
    pub fn string() -> StringAssertion {
        StringAssertion
    }

    /// Accepts any array; fails with "an array".
    pub fn array() -> ArrayAssertion {
        ArrayAssertion
    }

    /// Accepts any object, but neither `null` nor arrays; fails with "an object".
    pub fn object() -> ObjectAssertion {
        ObjectAssertion
    }

    /// An array whose elements all pass `item`, checked at `name[index]`.
    pub fn array_of<A: Assertion>(item: A) -> ArrayOf<A> {
        ArrayOf::new(item)
    }

    /// An object whose values all pass `value_assertion`, checked at `name.key`.
    pub fn object_of<A: Assertion>(value_assertion: A) -> ObjectOf<A> {
        ObjectOf::new(value_assertion)
    }

    /// A record with declared fields; add them with [`ShapeAssertion::field`].
    pub fn shape() -> ShapeAssertion {
        ShapeAssertion::new()
    }

    /// Accepts `null` (or an absent field) as `None`, otherwise defers to `inner`.
    pub fn maybe<A: Assertion>(inner: A) -> Maybe<A> {
        Maybe::new(inner)
    }

    /// Accepts what `first` accepts, or else what `second` accepts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mustbe::{is, Is};
    /// use serde_json::json;
    ///
    /// let either = Is::either(Is::string(), Is::number());
    /// assert!(is(&json!(5), &either, "v").unwrap().is_right());
    /// ```
    pub fn either<A: Assertion, B: Assertion>(first: A, second: B) -> Either<A, B> {
        Either::new(first, second)
    }

    /// Lifts a closure into an assertion.
    pub fn custom<F, T>(check: F) -> FnAssertion<F, T>
    where
        F: Fn(&Value, &ValuePath) -> AssertionResult<T> + Send + Sync,
        T: Into<Value>,
    {
        FnAssertion::new(check)
    }
}
