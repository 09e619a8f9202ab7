//! Error types for comparator dispatch

use equate_value::Kind;
use thiserror::Error;

use crate::failure::ComparisonFailure;

/// Result type alias
pub type Result<T> = std::result::Result<T, AssertionError>;

/// Comparator lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No comparator is registered for comparing the types {expected} and {actual}")]
    NoComparator { expected: Kind, actual: Kind },
}

/// Outcome of a failed registry-level assertion
#[derive(Error, Debug, Clone)]
pub enum AssertionError {
    #[error(transparent)]
    Failure(#[from] ComparisonFailure),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl AssertionError {
    /// The comparison failure, if the values were compared and found unequal.
    pub fn failure(&self) -> Option<&ComparisonFailure> {
        match self {
            AssertionError::Failure(failure) => Some(failure),
            AssertionError::Registry(_) => None,
        }
    }
}
