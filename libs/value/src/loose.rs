//! Truthiness, loose equality and identity.
//!
//! Loose equality over the scalar kinds and null:
//!
//! ```text
//!             | Null     | Bool         | Int            | Float          | String
//! ------------+----------+--------------+----------------+----------------+---------------------------
//! Null        | true     | !b           | i == 0         | f == 0.0       | s == ""
//! Bool        |          | a == b       | a == truthy(i) | a == truthy(f) | a == truthy(s)
//! Int         |          |              | a == b         | a as f64 == f  | numeric(s) ? n == s : cast(i) == s
//! Float       |          |              |                | a == b         | numeric(s) ? n == s : cast(f) == s
//! String      |          |              |                |                | both numeric ? n == n : a == b
//! ```
//!
//! The table is symmetric. A string is "numeric" when [`parse_numeric`] accepts it.
//! Integer-form strings beyond the `i64` range follow the overflow rules of
//! `strings_eq` when compared with another string.
//! Composite values: arrays compare element-wise, objects of the same class
//! compare property-wise, a stringifiable object equals a string with the same
//! text, and bool/null against a composite fall back to truthiness.

use std::sync::Arc;

use crate::cast::{self, parse_numeric, Number};
use crate::value::{Object, Value};

/// Boolean interpretation of a value.
///
/// Falsy: null, `false`, `0`, `0.0` / `-0.0`, `""`, `"0"` and the empty array.
/// Everything else is truthy, including `NaN`, `"0.0"` and `" "`.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || &**s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Loose (coercive) equality.
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(b), other) | (other, Value::Bool(b)) => *b == truthy(other),
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !truthy(other),

        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => *i as f64 == *f,
        (Value::Float(a), Value::Float(b)) => a == b,

        (Value::String(a), Value::String(b)) => strings_eq(a, b),
        (number @ (Value::Int(_) | Value::Float(_)), Value::String(s))
        | (Value::String(s), number @ (Value::Int(_) | Value::Float(_))) => number_string_eq(number, s),

        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(l, r)| loose_eq(l, r))
        }
        (Value::Object(object), Value::String(s)) | (Value::String(s), Value::Object(object)) => {
            object
                .as_stringifiable()
                .is_some_and(|stringifiable| stringifiable.to_string_value() == **s)
        }
        (Value::Object(a), Value::Object(b)) => same_object(a, b) || objects_loose_eq(&**a, &**b),

        _ => false,
    }
}

/// Strict equality: same kind and same value.
///
/// `Int(1)` and `Float(1.0)` are not identical, `NaN` is not identical to itself,
/// and objects are identical only when they are the same instance.
pub fn identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(l, r)| identical(l, r))
        }
        (Value::Object(a), Value::Object(b)) => same_object(a, b),
        _ => false,
    }
}

fn same_object(a: &Arc<dyn Object>, b: &Arc<dyn Object>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Two strings compare numerically when both are numeric, except where the
/// float values cannot tell them apart:
/// - an in-range integer never equals an overflowed one
/// - integers overflowed to the same float, and equal infinities, compare as text
fn strings_eq(a: &str, b: &str) -> bool {
    let (Some(x), Some(y)) = (parse_numeric(a), parse_numeric(b)) else {
        return a == b;
    };
    match (x, y) {
        (Number::Int(_), Number::Overflowed(_)) | (Number::Overflowed(_), Number::Int(_)) => false,
        (Number::Overflowed(p), Number::Overflowed(q)) if p == q => a == b,
        _ if x.as_f64() == y.as_f64() && x.as_f64().is_infinite() => a == b,
        _ => x.equals(y),
    }
}

fn number_string_eq(number: &Value, s: &str) -> bool {
    match (cast::as_number(number), parse_numeric(s)) {
        (Some(n), Some(parsed)) => n.equals(parsed),
        _ => cast::to_string(number) == s,
    }
}

fn objects_loose_eq(a: &dyn Object, b: &dyn Object) -> bool {
    if a.class_name() != b.class_name() {
        return false;
    }
    let left = a.properties();
    let right = b.properties();
    left.len() == right.len()
        && left.iter().all(|(name, value)| {
            right
                .iter()
                .find(|(other, _)| other == name)
                .is_some_and(|(_, other_value)| loose_eq(value, other_value))
        })
}
