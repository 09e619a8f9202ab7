//! String casting and numeric-string parsing.
//!
//! These are the conversions the loose-equality table relies on:
//! - [`to_string`]: the string form every value is cast to before a string comparison
//! - [`parse_numeric`]: recognizes numeric strings (`" 12"`, `"1e3"`, `"-.5"`)
//! - [`format_float`]: float rendering shared by casting and export

use std::borrow::Cow;

use crate::value::Value;

/// Significant digits used when casting a float to a string.
pub const CAST_PRECISION: usize = 14;

/// A number parsed out of a numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    /// An integer-form string outside the `i64` range, held as the nearest float.
    Overflowed(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) | Number::Overflowed(f) => f,
        }
    }

    /// Numeric equality: exact for two integers, float comparison otherwise.
    pub fn equals(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

/// How many digits [`format_float`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digits {
    /// Round to this many significant digits.
    Significant(usize),
    /// Shortest representation that round-trips.
    Shortest,
}

impl Digits {
    /// Largest decimal-point position still rendered in fixed notation.
    fn max_fixed_point(self) -> i32 {
        match self {
            Digits::Significant(n) => n as i32,
            Digits::Shortest => 17,
        }
    }
}

/// Cast a value to its string form.
///
/// Null casts to `""`, booleans to `"1"` / `""`, floats to 14 significant
/// digits. Stringifiable objects use their own representation; arrays cast to
/// `"Array"` and other objects to their class name.
pub fn to_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Bool(false) => Cow::Borrowed(""),
        Value::Int(i) => Cow::Owned(i.to_string()),
        Value::Float(f) => Cow::Owned(format_float(*f, Digits::Significant(CAST_PRECISION))),
        Value::String(s) => Cow::Borrowed(s),
        Value::Array(_) => Cow::Borrowed("Array"),
        Value::Object(object) => match object.as_stringifiable() {
            Some(stringifiable) => Cow::Owned(stringifiable.to_string_value()),
            None => Cow::Owned(object.class_name().to_string()),
        },
    }
}

/// Render a float.
///
/// Fixed notation is used while the decimal point sits between 3 places left of
/// the first digit and [`Digits::max_fixed_point`]; beyond that the output is
/// scientific with an upper-case `E` and an explicit exponent sign (`1.0E+25`,
/// `1.5E-7`). Trailing fractional zeros are never printed.
pub fn format_float(value: f64, digits: Digits) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = match digits {
        Digits::Significant(n) => format!("{:.*e}", n.saturating_sub(1), value),
        Digits::Shortest => format!("{:e}", value),
    };
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let significant: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let significant = significant.trim_end_matches('0');
    // exponent of the form 0.d1d2... x 10^point
    let point = exponent + 1;

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }

    if point < -3 || point > digits.max_fixed_point() {
        let (first, rest) = significant.split_at(1);
        out.push_str(first);
        out.push('.');
        out.push_str(if rest.is_empty() { "0" } else { rest });
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
    } else if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        out.push_str(significant);
    } else {
        let point = point as usize;
        if significant.len() <= point {
            out.push_str(significant);
            out.extend(std::iter::repeat('0').take(point - significant.len()));
        } else {
            out.push_str(&significant[..point]);
            out.push('.');
            out.push_str(&significant[point..]);
        }
    }
    out
}

fn is_numeric_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Parse a numeric string.
///
/// Accepts surrounding whitespace, an optional sign, a decimal part (`12`,
/// `1.5`, `.5`, `5.`) and an optional exponent. Anything else, including
/// trailing garbage such as `"12abc"`, is not numeric. Integer-form strings that
/// fit an `i64` parse as [`Number::Int`], those that do not as
/// [`Number::Overflowed`], and everything else as [`Number::Float`].
pub fn parse_numeric(raw: &str) -> Option<Number> {
    let trimmed = raw.trim_matches(is_numeric_whitespace);
    let bytes = trimmed.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    if pos < len && matches!(bytes[pos], b'+' | b'-') {
        pos += 1;
    }

    let integral_start = pos;
    while pos < len && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut digit_count = pos - integral_start;
    let mut integral = true;

    if pos < len && bytes[pos] == b'.' {
        integral = false;
        pos += 1;
        let fraction_start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        digit_count += pos - fraction_start;
    }

    if digit_count == 0 {
        return None;
    }

    if pos < len && matches!(bytes[pos], b'e' | b'E') {
        integral = false;
        pos += 1;
        if pos < len && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
        }
        let exponent_start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exponent_start {
            return None;
        }
    }

    if pos != len {
        return None;
    }

    if integral {
        return match trimmed.parse::<i64>() {
            Ok(i) => Some(Number::Int(i)),
            Err(_) => trimmed.parse::<f64>().ok().map(Number::Overflowed),
        };
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

/// The number a numeric value stands for. Only integers and floats have one.
pub fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Int(i) => Some(Number::Int(*i)),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}
