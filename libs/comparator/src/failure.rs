//! The failure value produced when a comparator rejects a pair.

use std::fmt;

use equate_value::Value;

use crate::diff;

/// An assertion mismatch.
///
/// Carries the original values, their exported forms for diff rendering, and
/// the human-readable message. Empty exported forms mean there is no diff
/// worth rendering and only the message should be shown.
#[derive(Debug, Clone)]
pub struct ComparisonFailure {
    expected: Value,
    actual: Value,
    expected_as_string: String,
    actual_as_string: String,
    identical: bool,
    message: String,
}

impl ComparisonFailure {
    pub fn new(
        expected: Value,
        actual: Value,
        expected_as_string: impl Into<String>,
        actual_as_string: impl Into<String>,
        identical: bool,
        message: impl Into<String>,
    ) -> Self {
        Self {
            expected,
            actual,
            expected_as_string: expected_as_string.into(),
            actual_as_string: actual_as_string.into(),
            identical,
            message: message.into(),
        }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn actual(&self) -> &Value {
        &self.actual
    }

    pub fn expected_as_string(&self) -> &str {
        &self.expected_as_string
    }

    pub fn actual_as_string(&self) -> &str {
        &self.actual_as_string
    }

    /// Whether a structural diff of the two values is meaningful.
    pub fn identical(&self) -> bool {
        self.identical
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Unified line diff of the exported forms, headed `--- Expected` / `+++ Actual`.
    ///
    /// `None` when both exported forms are empty.
    pub fn diff(&self) -> Option<String> {
        if self.expected_as_string.is_empty() && self.actual_as_string.is_empty() {
            return None;
        }
        Some(diff::unified(&self.expected_as_string, &self.actual_as_string))
    }
}

impl fmt::Display for ComparisonFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(diff) = self.diff() {
            write!(f, "\n{diff}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ComparisonFailure {}
