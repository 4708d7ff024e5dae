//! Error types for checked container access.
//!
//! Only the bounded container reports runtime errors. Ownership misuse on
//! the owning pointer is rejected by the compiler and has no error type.

use std::error::Error;
use std::fmt;

/// Errors reported by `BoundedArray` operations.
///
/// Every fallible operation checks its precondition before touching the
/// backing storage, so an `Err` always means the container is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index was not below the container's capacity.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Capacity of the container at the time of access.
        capacity: usize,
    },
    /// The requested capacity is above the configured ceiling.
    CapacityExceeded {
        /// Number of elements requested.
        requested: usize,
        /// Maximum number of elements the configuration allows.
        max: usize,
    },
    /// Backing storage for the requested capacity could not be reserved.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },
}

impl ArrayError {
    /// Build an [`ArrayError::IndexOutOfRange`] for `index` against `capacity`.
    pub fn out_of_range(index: usize, capacity: usize) -> Self {
        Self::IndexOutOfRange { index, capacity }
    }

    /// Whether this error is a failed bounds check.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, capacity } => {
                write!(
                    f,
                    "index out of range: index {index} is not below capacity {capacity}"
                )
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} elements, maximum {max}"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed for {requested} elements")
            }
        }
    }
}

impl Error for ArrayError {}
