//! The comparator contract shared by every comparator variant.

use equate_value::{Exporter, Value};
use serde::{Deserialize, Serialize};

use crate::failure::ComparisonFailure;

/// Options passed through from the assertion API.
///
/// All fields are optional when deserialized; missing ones take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Maximum numeric distance still considered equal.
    pub delta: f64,
    /// Compare ordered collections without regard to order.
    pub canonicalize: bool,
    /// Compare strings case-insensitively.
    pub ignore_case: bool,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            delta: 0.0,
            canonicalize: false,
            ignore_case: false,
        }
    }
}

impl ComparisonOptions {
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_canonicalize(mut self, canonicalize: bool) -> Self {
        self.canonicalize = canonicalize;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// A unit deciding applicability and equality for a category of value pairs.
///
/// Comparators are constructed once, hold no per-comparison state, and are
/// shared across threads.
pub trait Comparator: Send + Sync {
    /// Stable identifier, used by [`crate::Registry::unregister`] and in logs.
    fn name(&self) -> &'static str;

    /// Whether this comparator handles the pair.
    ///
    /// Must be pure and depend only on the runtime kinds (and object
    /// capabilities) of the two values, never on their content.
    fn accepts(&self, expected: &Value, actual: &Value) -> bool;

    /// Decide equality for an accepted pair.
    fn assert_equals(
        &self,
        expected: &Value,
        actual: &Value,
        options: &ComparisonOptions,
        exporter: &dyn Exporter,
    ) -> Result<(), ComparisonFailure>;
}
