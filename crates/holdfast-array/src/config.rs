//! Construction limits for bounded arrays.

use holdfast_core::ArrayError;

/// Limits applied by [`BoundedArray::with_config`](crate::BoundedArray::with_config).
///
/// Use this when the capacity comes from runtime input and must not be
/// trusted to stay reasonable. Immutable once passed in; the array does not
/// keep a reference to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Largest capacity, in elements, that construction will accept.
    ///
    /// Default: `usize::MAX` (no ceiling beyond what the allocator can satisfy).
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Configuration with the given capacity ceiling.
    pub fn new(max_capacity: usize) -> Self {
        Self { max_capacity }
    }

    /// Check a requested capacity against the ceiling.
    pub fn check(&self, capacity: usize) -> Result<(), ArrayError> {
        if capacity > self.max_capacity {
            return Err(ArrayError::CapacityExceeded {
                requested: capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            max_capacity: usize::MAX,
        }
    }
}
