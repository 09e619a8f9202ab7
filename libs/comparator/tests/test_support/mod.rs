#![allow(dead_code)]

use equate_comparator::{Comparator, ComparisonFailure, ComparisonOptions};
use equate_value::{Exporter, Object, Stringifiable, Value};

/// An object with a to-string capability.
#[derive(Debug)]
pub struct Named(pub String);

impl Stringifiable for Named {
    fn to_string_value(&self) -> String {
        self.0.clone()
    }
}

impl Object for Named {
    fn class_name(&self) -> &str {
        "Named"
    }

    fn properties(&self) -> Vec<(String, Value)> {
        vec![("name".to_string(), Value::from(self.0.as_str()))]
    }

    fn as_stringifiable(&self) -> Option<&dyn Stringifiable> {
        Some(self)
    }
}

/// An object without a to-string capability.
#[derive(Debug)]
pub struct Opaque;

impl Object for Opaque {
    fn class_name(&self) -> &str {
        "Opaque"
    }
}

pub fn named(name: &str) -> Value {
    Value::object(Named(name.to_string()))
}

pub fn opaque() -> Value {
    Value::object(Opaque)
}

/// Accepts array pairs and compares them by length only.
#[derive(Debug, Default)]
pub struct ArrayLengthComparator;

impl Comparator for ArrayLengthComparator {
    fn name(&self) -> &'static str {
        "array-length"
    }

    fn accepts(&self, expected: &Value, actual: &Value) -> bool {
        expected.is_array() && actual.is_array()
    }

    fn assert_equals(
        &self,
        expected: &Value,
        actual: &Value,
        _options: &ComparisonOptions,
        exporter: &dyn Exporter,
    ) -> Result<(), ComparisonFailure> {
        let len = |value: &Value| match value {
            Value::Array(items) => items.len(),
            _ => 0,
        };
        if len(expected) == len(actual) {
            return Ok(());
        }
        Err(ComparisonFailure::new(
            expected.clone(),
            actual.clone(),
            exporter.export(expected),
            exporter.export(actual),
            true,
            "Failed asserting that two arrays are equal.",
        ))
    }
}

/// Accepts everything and never fails.
#[derive(Debug, Default)]
pub struct Lenient;

impl Comparator for Lenient {
    fn name(&self) -> &'static str {
        "lenient"
    }

    fn accepts(&self, _expected: &Value, _actual: &Value) -> bool {
        true
    }

    fn assert_equals(
        &self,
        _expected: &Value,
        _actual: &Value,
        _options: &ComparisonOptions,
        _exporter: &dyn Exporter,
    ) -> Result<(), ComparisonFailure> {
        Ok(())
    }
}
