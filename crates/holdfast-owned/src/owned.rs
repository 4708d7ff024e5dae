//! The [`Owned`] handle.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::raw::RawBox;

/// Sole owner of one heap-allocated `T`.
///
/// The allocation is released exactly once, when the handle is dropped.
/// Moving the handle moves ownership; the moved-from binding is unusable.
///
/// Like [`Box`], the handle's own operations are associated functions
/// (`Owned::release(p)`, not `p.release()`) so they never shadow methods of
/// the pointee reached through [`Deref`].
///
/// `Owned` cannot be cloned:
///
/// ```compile_fail
/// use holdfast_owned::Owned;
///
/// let p = Owned::new(1_i32);
/// let q = Owned::clone(&p);
/// ```
///
/// Method syntax reaches the pointee's `clone` through [`Deref`], so it
/// yields a `T`, never a second handle:
///
/// ```compile_fail
/// use holdfast_owned::Owned;
///
/// let p = Owned::new(1_i32);
/// let q: Owned<i32> = p.clone();
/// ```
///
/// and a moved-from handle cannot be read:
///
/// ```compile_fail
/// use holdfast_owned::Owned;
///
/// let p = Owned::new(1);
/// let q = p;
/// assert_eq!(*p, 1);
/// ```
pub struct Owned<T> {
    raw: RawBox<T>,
}

impl<T> Owned<T> {
    /// Move `value` into a fresh heap allocation owned by the new handle.
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Take ownership of an existing heap allocation.
    pub fn from_box(b: Box<T>) -> Self {
        Self {
            raw: RawBox::from_box(b),
        }
    }

    /// Take ownership of a raw heap allocation.
    ///
    /// The pointer is trusted: beyond the null check, nothing about it is
    /// validated.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Box::into_raw`] or [`Owned::into_raw`] for the
    /// same `T`, and the caller must neither use nor release it afterwards.
    /// Passing a stack address, a freed pointer, or a pointer owned elsewhere
    /// is undefined behaviour.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` is null.
    ///
    /// ```
    /// use holdfast_owned::Owned;
    ///
    /// let raw = Box::into_raw(Box::new(7_u32));
    /// // SAFETY: `raw` is a fresh `Box` allocation that nothing else owns.
    /// let p = unsafe { Owned::from_raw(raw) };
    /// assert_eq!(*p, 7);
    /// ```
    #[allow(unsafe_code)]
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        assert!(!ptr.is_null(), "Owned::from_raw called with a null pointer");
        Self {
            // SAFETY: non-null checked above; the rest is the caller's contract.
            raw: unsafe { RawBox::from_raw(ptr) },
        }
    }

    /// Shared access to the owned value.
    pub fn get(this: &Self) -> &T {
        this.raw.get()
    }

    /// Exclusive access to the owned value.
    pub fn get_mut(this: &mut Self) -> &mut T {
        this.raw.get_mut()
    }

    /// Address of the owned allocation.
    ///
    /// Stable for the lifetime of the handle, including across moves of the
    /// handle itself.
    pub fn as_ptr(this: &Self) -> *const T {
        this.raw.as_ptr()
    }

    /// Drop the current value and store `value` in the same allocation.
    ///
    /// The old value is dropped exactly once, before this returns.
    pub fn reset(this: &mut Self, value: T) {
        *this.raw.get_mut() = value;
    }

    /// Store `value` in the same allocation and return the previous value.
    pub fn replace(this: &mut Self, value: T) -> T {
        mem::replace(this.raw.get_mut(), value)
    }

    /// Move the value out and free the allocation.
    pub fn release(this: Self) -> T {
        *this.raw.into_box()
    }

    /// Convert into a standard [`Box`] without reallocating.
    pub fn into_box(this: Self) -> Box<T> {
        this.raw.into_box()
    }

    /// Give up ownership and return the raw allocation.
    ///
    /// Nothing is released. Pass the pointer to [`Owned::from_raw`] or
    /// [`Box::from_raw`] to release it later, or it leaks.
    #[must_use = "the allocation leaks unless ownership is taken back"]
    pub fn into_raw(this: Self) -> *mut T {
        this.raw.into_raw()
    }
}

impl<T> Deref for Owned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.raw.get()
    }
}

impl<T> DerefMut for Owned<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.raw.get_mut()
    }
}

impl<T> AsRef<T> for Owned<T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> AsMut<T> for Owned<T> {
    fn as_mut(&mut self) -> &mut T {
        self
    }
}

impl<T> Borrow<T> for Owned<T> {
    fn borrow(&self) -> &T {
        self
    }
}

impl<T> BorrowMut<T> for Owned<T> {
    fn borrow_mut(&mut self) -> &mut T {
        self
    }
}

impl<T> From<T> for Owned<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Box<T>> for Owned<T> {
    fn from(b: Box<T>) -> Self {
        Self::from_box(b)
    }
}

impl<T: Default> Default for Owned<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Owned").field(&**self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl<T: PartialEq> PartialEq for Owned<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Owned<T> {}

impl<T: PartialOrd> PartialOrd for Owned<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Owned<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Owned<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}
