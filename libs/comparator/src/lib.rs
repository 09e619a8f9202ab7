//! Comparator dispatch and equality decisions for test assertions.
//!
//! A [`Registry`] holds an ordered list of [`Comparator`]s. For a pair of
//! values it selects the first comparator whose `accepts` is true, and that
//! comparator alone decides equality:
//!
//! ```text
//! registry.find(expected, actual) -> comparator
//!      |
//! comparator.assert_equals(expected, actual, options, exporter)
//!      |
//! Ok(())  or  Err(ComparisonFailure { message, expected/actual as strings, ... })
//! ```
//!
//! Built-in comparators:
//! - [`ScalarComparator`]: scalars, null, and strings against stringifiable objects
//! - [`TypeComparator`]: fallback that only checks the two values share a kind
//!
//! Comparators for arrays, objects, numbers with tolerance or dates plug in
//! through [`Registry::register`].
//!
//! ```
//! use equate_comparator::{ComparisonOptions, Registry};
//! use equate_value::Value;
//!
//! let registry = Registry::new();
//! let options = ComparisonOptions::default().with_ignore_case(true);
//! assert!(registry
//!     .assert_equals(&Value::from("Foo"), &Value::from("foo"), &options)
//!     .is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod comparator;
mod diff;
pub mod error;
pub mod failure;
pub mod registry;
pub mod scalar;
pub mod type_comparator;

pub use comparator::{Comparator, ComparisonOptions};
pub use error::{AssertionError, RegistryError, Result};
pub use failure::ComparisonFailure;
pub use registry::Registry;
pub use scalar::ScalarComparator;
pub use type_comparator::TypeComparator;
