//! Value model shared by the equate comparators.
//!
//! This crate owns everything the comparators need to know about the values
//! they compare:
//! - **value**: the `Value` sum type, its `Kind`, and the `Object` / `Stringifiable`
//!   capability traits for composite values
//! - **cast**: string casting and numeric-string parsing
//! - **loose**: truthiness, loose (coercive) equality and identity
//! - **export**: the `Exporter` trait and the `DefaultExporter` used in failure messages
//!
//! Loose equality is an explicit table over `{null, bool, int, float, string}`
//! (see [`loose::loose_eq`]); there is no implicit cross-type equality anywhere else.

#![forbid(unsafe_code)]

pub mod cast;
pub mod export;
mod json;
pub mod loose;
pub mod value;

pub use cast::Number;
pub use export::{DefaultExporter, Exporter};
pub use loose::{identical, loose_eq, truthy};
pub use value::{Kind, Object, Record, Stringifiable, Value};
