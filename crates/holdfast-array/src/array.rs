//! The [`BoundedArray`] container.

#[cfg(feature = "tracing")]
use std::any;
use std::fmt;
use std::mem;
use std::slice;

use holdfast_core::{ArrayError, Element};

use crate::config::ArrayConfig;
use crate::trace::{debug_event, warn_event};

/// Fixed-capacity sequence of `T` backed by a single heap allocation.
///
/// All `capacity` slots are default-constructed up front, so every index
/// below the capacity always refers to a live element. Mutation goes through
/// [`at_mut`](Self::at_mut) and the other checked operations; the array does
/// not implement `Index`/`IndexMut`, because those would panic instead of
/// returning an error.
///
/// Dropping the array drops every element in index order and then frees the
/// backing allocation as one unit.
pub struct BoundedArray<T> {
    /// Backing storage. Its length is the capacity and never changes.
    slots: Box<[T]>,
}

impl<T: Element> BoundedArray<T> {
    /// Allocate `capacity` default-constructed elements.
    ///
    /// Allocation failure aborts the process, as with any standard
    /// collection. Use [`try_new`](Self::try_new) to get an error instead.
    pub fn new(capacity: usize) -> Self {
        let slots: Box<[T]> = (0..capacity).map(|_| T::default()).collect();
        debug_event!(
            capacity,
            element = any::type_name::<T>(),
            "bounded array allocated"
        );
        Self { slots }
    }

    /// Like [`new`](Self::new), but reports allocation failure as
    /// [`ArrayError::AllocationFailed`].
    ///
    /// ```
    /// use holdfast_array::{ArrayError, BoundedArray};
    ///
    /// let err = BoundedArray::<u64>::try_new(usize::MAX).unwrap_err();
    /// assert_eq!(err, ArrayError::AllocationFailed { requested: usize::MAX });
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ArrayError> {
        let mut storage = Vec::new();
        storage.try_reserve_exact(capacity).map_err(|_reason| {
            warn_event!(
                capacity,
                element = any::type_name::<T>(),
                reason = %_reason,
                "bounded array allocation failed"
            );
            ArrayError::AllocationFailed {
                requested: capacity,
            }
        })?;
        storage.extend((0..capacity).map(|_| T::default()));
        debug_event!(
            capacity,
            element = any::type_name::<T>(),
            "bounded array allocated"
        );
        Ok(Self {
            slots: storage.into_boxed_slice(),
        })
    }

    /// Check `capacity` against `config`, then construct as
    /// [`try_new`](Self::try_new) does.
    ///
    /// ```
    /// use holdfast_array::{ArrayConfig, ArrayError, BoundedArray};
    ///
    /// let config = ArrayConfig::new(1024);
    /// assert!(BoundedArray::<u8>::with_config(512, &config).is_ok());
    /// assert_eq!(
    ///     BoundedArray::<u8>::with_config(4096, &config).unwrap_err(),
    ///     ArrayError::CapacityExceeded { requested: 4096, max: 1024 },
    /// );
    /// ```
    pub fn with_config(capacity: usize, config: &ArrayConfig) -> Result<Self, ArrayError> {
        config.check(capacity)?;
        Self::try_new(capacity)
    }

    /// Move the element at `index` out, leaving a default value behind.
    pub fn take(&mut self, index: usize) -> Result<T, ArrayError> {
        self.at_mut(index).map(mem::take)
    }

    /// Restore every slot to its default value.
    ///
    /// Previous values are dropped in index order. The allocation is kept.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = T::default();
        }
    }
}

impl<T> BoundedArray<T> {
    /// Number of elements, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the capacity is zero.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shared reference to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let index = self.check(index)?;
        Ok(&self.slots[index])
    }

    /// Exclusive reference to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let index = self.check(index)?;
        Ok(&mut self.slots[index])
    }

    /// Store `value` at `index`, dropping the previous element.
    ///
    /// On error `value` is dropped and the array is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Store `value` at `index` and return the previous element.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        self.at_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Read-only view of all elements.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    fn check(&self, index: usize) -> Result<usize, ArrayError> {
        let capacity = self.capacity();
        if index < capacity {
            Ok(index)
        } else {
            debug_event!(index, capacity, "bounds check rejected index");
            Err(ArrayError::out_of_range(index, capacity))
        }
    }
}

/// Iterator over shared references to a [`BoundedArray`]'s elements.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Clone> Clone for BoundedArray<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedArray")
            .field("capacity", &self.capacity())
            .field("slots", &self.slots)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for BoundedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq> Eq for BoundedArray<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use holdfast_test_utils::{arb_pair, DropTracker, Pair, Tracked};
    use proptest::prelude::*;

    #[test]
    fn three_slot_scenario() {
        let mut a = BoundedArray::<i32>::new(3);
        *a.at_mut(0).unwrap() = 1;
        *a.at_mut(1).unwrap() = 2;
        assert_eq!(*a.at(0).unwrap(), 1);
        assert_eq!(*a.at(1).unwrap(), 2);
        assert_eq!(*a.at(2).unwrap(), 0);
        assert_eq!(
            a.at(3),
            Err(ArrayError::IndexOutOfRange {
                index: 3,
                capacity: 3
            })
        );
    }

    #[test]
    fn slots_start_at_default() {
        let a = BoundedArray::<String>::new(4);
        assert_eq!(a.capacity(), 4);
        assert!(a.iter().all(String::is_empty));
    }

    #[test]
    fn zero_capacity_rejects_every_index() {
        let mut a = BoundedArray::<u8>::new(0);
        assert!(a.is_empty());
        assert!(a.at(0).unwrap_err().is_out_of_range());
        assert!(a.at_mut(usize::MAX).unwrap_err().is_out_of_range());
        assert_eq!(a.iter().count(), 0);
    }

    #[test]
    fn failed_set_leaves_array_unchanged() {
        let mut a = BoundedArray::<i64>::new(2);
        a.set(0, 5).unwrap();
        let before = a.clone();
        assert!(a.set(2, 99).is_err());
        assert_eq!(a, before);
    }

    #[test]
    fn failed_set_drops_the_rejected_value() {
        let tracker = DropTracker::new();
        let mut a = BoundedArray::<Tracked<u8>>::new(1);
        let err = a.set(1, tracker.track(7, 0)).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(tracker.order(), vec![7]);
        assert!(!a.at(0).unwrap().is_tracked());
    }

    #[test]
    fn replace_and_take_return_previous_values() {
        let mut a = BoundedArray::<String>::new(2);
        a.set(1, "one".into()).unwrap();
        assert_eq!(a.replace(1, "uno".into()).unwrap(), "one");
        assert_eq!(a.take(1).unwrap(), "uno");
        assert_eq!(a.at(1).unwrap(), "");
        assert!(a.take(2).is_err());
    }

    #[test]
    fn reset_restores_defaults_and_drops_old_values() {
        let tracker = DropTracker::new();
        let mut a = BoundedArray::<Tracked<i32>>::new(3);
        for i in 0..3 {
            a.set(i, tracker.track(i, i as i32)).unwrap();
        }
        a.reset();
        assert_eq!(tracker.order(), vec![0, 1, 2]);
        assert!(a.iter().all(|slot| !slot.is_tracked()));
        assert_eq!(a.capacity(), 3);
    }

    #[test]
    fn drop_releases_elements_in_index_order() {
        let tracker = DropTracker::new();
        let mut a = BoundedArray::<Tracked<()>>::new(4);
        for i in (0..4).rev() {
            a.set(i, tracker.track(i, ())).unwrap();
        }
        assert_eq!(tracker.drops(), 0);
        drop(a);
        assert_eq!(tracker.order(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn pair_elements() {
        let mut a = BoundedArray::<Pair>::new(2);
        a.set(0, Pair::new("left", 1)).unwrap();
        a.at_mut(1).unwrap().count = 9;
        assert_eq!(a.at(0).unwrap(), &Pair::new("left", 1));
        assert_eq!(a.at(1).unwrap(), &Pair::new("", 9));
    }

    #[test]
    fn iterators_walk_in_index_order() {
        let mut a = BoundedArray::<u32>::new(3);
        for i in 0..3 {
            a.set(i, i as u32 * 10).unwrap();
        }
        let forward: Vec<u32> = a.iter().copied().collect();
        assert_eq!(forward, vec![0, 10, 20]);
        let backward: Vec<u32> = a.iter().rev().copied().collect();
        assert_eq!(backward, vec![20, 10, 0]);
        assert_eq!(a.iter().len(), 3);
        let mut sum = 0_u32;
        for v in &a {
            sum += *v;
        }
        assert_eq!(sum, 30);
        assert_eq!(a.as_slice(), &[0, 10, 20]);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = BoundedArray::<String>::new(1);
        a.set(0, "original".into()).unwrap();
        let mut b = a.clone();
        b.set(0, "copy".into()).unwrap();
        assert_eq!(a.at(0).unwrap(), "original");
        assert_eq!(b.at(0).unwrap(), "copy");
    }

    #[test]
    fn debug_shows_capacity_and_slots() {
        let a = BoundedArray::<u8>::new(2);
        assert_eq!(format!("{a:?}"), "BoundedArray { capacity: 2, slots: [0, 0] }");
    }

    #[test]
    fn with_config_checks_ceiling_before_allocating() {
        let config = ArrayConfig::new(8);
        let a = BoundedArray::<u16>::with_config(8, &config).unwrap();
        assert_eq!(a.capacity(), 8);
        assert_eq!(
            BoundedArray::<u16>::with_config(9, &config).unwrap_err(),
            ArrayError::CapacityExceeded {
                requested: 9,
                max: 8
            }
        );
    }

    #[test]
    fn try_new_reports_impossible_sizes() {
        let err = BoundedArray::<[u8; 16]>::try_new(usize::MAX / 2).unwrap_err();
        assert_eq!(
            err,
            ArrayError::AllocationFailed {
                requested: usize::MAX / 2
            }
        );
    }

    proptest! {
        #[test]
        fn bounds_invariant(capacity in 0usize..64, index in 0usize..128) {
            let mut a = BoundedArray::<i32>::new(capacity);
            let before = a.clone();
            match a.at_mut(index) {
                Ok(slot) => {
                    prop_assert!(index < capacity);
                    *slot = 1;
                }
                Err(err) => {
                    prop_assert!(index >= capacity);
                    prop_assert_eq!(err, ArrayError::IndexOutOfRange { index, capacity });
                    prop_assert_eq!(&a, &before);
                }
            }
        }

        #[test]
        fn writes_do_not_leak_into_other_slots(
            capacity in 1usize..32,
            writes in proptest::collection::vec((0usize..32, any::<i64>()), 0..64),
        ) {
            let mut a = BoundedArray::<i64>::new(capacity);
            let mut model = vec![0_i64; capacity];
            for (index, value) in writes {
                let result = a.set(index, value);
                if index < capacity {
                    prop_assert!(result.is_ok());
                    model[index] = value;
                } else {
                    prop_assert!(result.is_err());
                }
                prop_assert_eq!(a.as_slice(), model.as_slice());
            }
        }

        #[test]
        fn pair_slots_are_independent(
            capacity in 1usize..16,
            pairs in proptest::collection::vec((0usize..16, arb_pair()), 0..32),
        ) {
            let mut a = BoundedArray::<Pair>::new(capacity);
            let mut model = vec![Pair::default(); capacity];
            for (index, pair) in pairs {
                if index < capacity {
                    model[index] = pair.clone();
                }
                let _ = a.set(index, pair);
            }
            for (i, expected) in model.iter().enumerate() {
                prop_assert_eq!(a.at(i).unwrap(), expected);
            }
        }
    }
}
