//! Equality for scalars, null, and strings against stringifiable objects.

use std::borrow::Cow;

use equate_value::{cast, identical, loose_eq, Exporter, Value};

use crate::comparator::{Comparator, ComparisonOptions};
use crate::failure::ComparisonFailure;

/// Compares scalar or null values for equality.
///
/// A pair is compared as strings whenever either side is a string and the
/// other side is not a boolean; this keeps `0` from equalling `"abc"`.
/// Booleans keep their truthiness semantics, so `true` equals `"1"`.
/// Of the options only `ignore_case` applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarComparator;

impl ScalarComparator {
    pub fn new() -> Self {
        Self
    }
}

fn is_scalar_or_null(value: &Value) -> bool {
    value.is_scalar() || value.is_null()
}

fn is_stringifiable(value: &Value) -> bool {
    value.as_stringifiable().is_some()
}

/// Working copies of the pair: both cast to strings (lower-cased when
/// `ignore_case`) if the pair is compared as strings, borrowed as-is otherwise.
fn comparable<'a>(
    expected: &'a Value,
    actual: &'a Value,
    ignore_case: bool,
) -> (Cow<'a, Value>, Cow<'a, Value>) {
    let as_strings = (expected.is_string() && !actual.is_bool())
        || (actual.is_string() && !expected.is_bool());
    if !as_strings {
        return (Cow::Borrowed(expected), Cow::Borrowed(actual));
    }

    let as_string = |value: &Value| {
        let text = cast::to_string(value);
        let text = if ignore_case {
            text.to_lowercase()
        } else {
            text.into_owned()
        };
        Cow::Owned(Value::from(text))
    };
    (as_string(expected), as_string(actual))
}

impl Comparator for ScalarComparator {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn accepts(&self, expected: &Value, actual: &Value) -> bool {
        (is_scalar_or_null(expected) && is_scalar_or_null(actual))
            || (expected.is_string() && is_stringifiable(actual))
            || (is_stringifiable(expected) && actual.is_string())
    }

    fn assert_equals(
        &self,
        expected: &Value,
        actual: &Value,
        options: &ComparisonOptions,
        exporter: &dyn Exporter,
    ) -> Result<(), ComparisonFailure> {
        let (expected_cmp, actual_cmp) = comparable(expected, actual, options.ignore_case);

        if !identical(&expected_cmp, &actual_cmp) && expected.is_string() && actual.is_string() {
            return Err(ComparisonFailure::new(
                expected.clone(),
                actual.clone(),
                exporter.export(expected),
                exporter.export(actual),
                false,
                "Failed asserting that two strings are equal.",
            ));
        }

        if !loose_eq(&expected_cmp, &actual_cmp) {
            // no diff for scalar mismatches
            return Err(ComparisonFailure::new(
                expected.clone(),
                actual.clone(),
                String::new(),
                String::new(),
                false,
                format!(
                    "Failed asserting that {} matches expected {}.",
                    exporter.export(actual),
                    exporter.export(expected)
                ),
            ));
        }

        Ok(())
    }
}
