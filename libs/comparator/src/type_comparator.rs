//! Fallback comparator that only checks value kinds.

use equate_value::{Exporter, Kind, Value};

use crate::comparator::{Comparator, ComparisonOptions};
use crate::failure::ComparisonFailure;

/// Accepts every pair and fails only when the two kinds differ.
///
/// Registered last by default so that every pair finds a comparator. It
/// decides nothing about content: two arrays or two objects always pass
/// unless a more specific comparator is registered ahead of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeComparator;

impl TypeComparator {
    pub fn new() -> Self {
        Self
    }
}

impl Comparator for TypeComparator {
    fn name(&self) -> &'static str {
        "type"
    }

    fn accepts(&self, _expected: &Value, _actual: &Value) -> bool {
        true
    }

    fn assert_equals(
        &self,
        expected: &Value,
        actual: &Value,
        _options: &ComparisonOptions,
        exporter: &dyn Exporter,
    ) -> Result<(), ComparisonFailure> {
        let expected_kind = Kind::of(expected);
        if expected_kind == Kind::of(actual) {
            return Ok(());
        }

        Err(ComparisonFailure::new(
            expected.clone(),
            actual.clone(),
            String::new(),
            String::new(),
            false,
            format!(
                "{} does not match expected type \"{}\".",
                exporter.shortened_export(actual),
                expected_kind
            ),
        ))
    }
}
