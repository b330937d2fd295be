//! Error types for assertion failures.
//!
//! This module provides the validation failure type, carrying the expected
//! kind, the path and the offending value, and the crate error that separates
//! it from defects.

mod assertion_error;

pub use assertion_error::{AssertionError, Error};
