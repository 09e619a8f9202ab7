//! Prioritized first-match comparator dispatch.

use equate_value::{DefaultExporter, Exporter, Kind, Value};
use once_cell::sync::Lazy;

use crate::comparator::{Comparator, ComparisonOptions};
use crate::error::RegistryError;
use crate::scalar::ScalarComparator;
use crate::type_comparator::TypeComparator;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Ordered set of comparators plus the exporter they report with.
///
/// Lookup order is custom comparators, most recently registered first, then
/// the defaults in their fixed order. The first comparator that accepts a pair
/// is the only one consulted for it.
pub struct Registry {
    custom: Vec<Box<dyn Comparator>>,
    defaults: Vec<Box<dyn Comparator>>,
    exporter: Box<dyn Exporter>,
}

impl Registry {
    /// Default comparators (`scalar`, then `type`) with the [`DefaultExporter`].
    pub fn new() -> Self {
        Self::with_exporter(DefaultExporter::new())
    }

    /// Default comparators reporting through `exporter`.
    pub fn with_exporter(exporter: impl Exporter + 'static) -> Self {
        let defaults: Vec<Box<dyn Comparator>> = vec![
            Box::new(ScalarComparator::new()),
            Box::new(TypeComparator::new()),
        ];
        Self {
            custom: Vec::new(),
            defaults,
            exporter: Box::new(exporter),
        }
    }

    /// A registry without any comparator, default or custom.
    pub fn empty() -> Self {
        Self {
            custom: Vec::new(),
            defaults: Vec::new(),
            exporter: Box::new(DefaultExporter::new()),
        }
    }

    /// Shared registry with the default comparators.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn exporter(&self) -> &dyn Exporter {
        self.exporter.as_ref()
    }

    /// Add a comparator ahead of every comparator already present.
    pub fn register(&mut self, comparator: impl Comparator + 'static) {
        tracing::debug!(comparator = comparator.name(), "Registering comparator");
        self.custom.insert(0, Box::new(comparator));
    }

    /// Remove custom comparators named `name`. Defaults cannot be removed.
    ///
    /// Returns whether anything was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|comparator| comparator.name() != name);
        self.custom.len() != before
    }

    /// Drop all custom comparators.
    pub fn reset(&mut self) {
        self.custom.clear();
    }

    /// Comparators in lookup order.
    pub fn comparators(&self) -> impl Iterator<Item = &dyn Comparator> + '_ {
        self.custom
            .iter()
            .chain(self.defaults.iter())
            .map(|comparator| comparator.as_ref())
    }

    /// The comparator responsible for the pair.
    pub fn find(&self, expected: &Value, actual: &Value) -> Result<&dyn Comparator, RegistryError> {
        match self
            .comparators()
            .find(|comparator| comparator.accepts(expected, actual))
        {
            Some(comparator) => {
                tracing::trace!(
                    comparator = comparator.name(),
                    expected = %Kind::of(expected),
                    actual = %Kind::of(actual),
                    "Selected comparator"
                );
                Ok(comparator)
            }
            None => {
                tracing::debug!(
                    expected = %Kind::of(expected),
                    actual = %Kind::of(actual),
                    "No comparator accepts the pair"
                );
                Err(RegistryError::NoComparator {
                    expected: Kind::of(expected),
                    actual: Kind::of(actual),
                })
            }
        }
    }

    /// Find the responsible comparator and let it decide equality.
    pub fn assert_equals(
        &self,
        expected: &Value,
        actual: &Value,
        options: &ComparisonOptions,
    ) -> crate::Result<()> {
        let comparator = self.find(expected, actual)?;
        comparator.assert_equals(expected, actual, options, self.exporter())?;
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
