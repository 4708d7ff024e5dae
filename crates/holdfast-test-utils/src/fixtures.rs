//! Reusable value fixtures.
//!
//! - [`DropTracker`] hands out [`Tracked`] values and records the id of each
//!   one as it is dropped.
//! - [`Pair`] is a plain two-field value type with a default state.

use std::cell::RefCell;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use proptest::prelude::*;

type DropLog = Rc<RefCell<Vec<usize>>>;

/// Shared log of dropped [`Tracked`] values.
///
/// Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct DropTracker {
    log: DropLog,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that dropping it appends `id` to this tracker's log.
    pub fn track<T>(&self, id: usize, value: T) -> Tracked<T> {
        Tracked {
            id,
            value,
            log: Some(Rc::clone(&self.log)),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.log.borrow().len()
    }

    /// Ids of dropped values, in drop order.
    pub fn order(&self) -> Vec<usize> {
        self.log.borrow().clone()
    }

    /// Whether the value tracked as `id` has been dropped.
    pub fn dropped(&self, id: usize) -> bool {
        self.log.borrow().contains(&id)
    }
}

/// A value that reports its own drop to a [`DropTracker`].
///
/// The [`Default`] value is untracked, so it can fill container slots
/// without showing up in any log.
pub struct Tracked<T> {
    id: usize,
    value: T,
    log: Option<DropLog>,
}

impl<T> Tracked<T> {
    /// Id this value reports when dropped.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Whether dropping this value will be recorded.
    pub fn is_tracked(&self) -> bool {
        self.log.is_some()
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Tracked<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Default> Default for Tracked<T> {
    fn default() -> Self {
        Self {
            id: usize::MAX,
            value: T::default(),
            log: None,
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("id", &self.id)
            .field("value", &self.value)
            .finish()
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(self.id);
        }
    }
}

/// Two-field value type with a default state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair {
    pub name: String,
    pub count: i64,
}

impl Pair {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Strategy producing arbitrary [`Pair`] values.
pub fn arb_pair() -> impl Strategy<Value = Pair> {
    ("[a-z]{0,8}", any::<i64>()).prop_map(|(name, count)| Pair::new(name, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_are_logged_in_order() {
        let tracker = DropTracker::new();
        let a = tracker.track(1, "a");
        let b = tracker.track(2, "b");
        drop(b);
        drop(a);
        assert_eq!(tracker.order(), vec![2, 1]);
        assert!(tracker.dropped(1));
        assert!(!tracker.dropped(3));
    }

    #[test]
    fn default_is_untracked() {
        let tracker = DropTracker::new();
        let value: Tracked<i32> = Tracked::default();
        assert!(!value.is_tracked());
        drop(value);
        assert_eq!(tracker.drops(), 0);
    }

    #[test]
    fn clones_share_the_log() {
        let tracker = DropTracker::new();
        let other = tracker.clone();
        drop(other.track(7, ()));
        assert_eq!(tracker.order(), vec![7]);
    }

    #[test]
    fn tracked_derefs_to_value() {
        let tracker = DropTracker::new();
        let mut v = tracker.track(0, vec![1, 2]);
        v.push(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.id(), 0);
    }

    #[test]
    fn pair_default_is_empty() {
        let p = Pair::default();
        assert_eq!(p, Pair::new("", 0));
    }
}
