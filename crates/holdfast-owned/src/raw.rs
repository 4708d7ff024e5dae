//! Raw heap allocation owned through a non-null pointer.
//!
//! [`RawBox`] is the only place this crate touches raw pointers. Its
//! invariant: `ptr` came from `Box::into_raw` (or `Box::leak`), points to a
//! live `T`, and no other value owns it. Every method relies on that.

#![allow(unsafe_code)]

use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

pub(crate) struct RawBox<T> {
    ptr: NonNull<T>,
    // Tells drop check that we own a `T`.
    _owns: PhantomData<T>,
}

impl<T> RawBox<T> {
    pub(crate) fn from_box(b: Box<T>) -> Self {
        Self {
            ptr: NonNull::from(Box::leak(b)),
            _owns: PhantomData,
        }
    }

    /// Adopt an allocation handed out by `Box::into_raw`.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, come from `Box::<T>::into_raw` with the global
    /// allocator, point to an initialized `T`, and not be used or freed by
    /// anyone else afterwards.
    pub(crate) unsafe fn from_raw(ptr: *mut T) -> Self {
        debug_assert!(!ptr.is_null());
        Self {
            // SAFETY: non-null per the caller's contract.
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            _owns: PhantomData,
        }
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn get(&self) -> &T {
        // SAFETY: live and uniquely owned; the shared borrow of `self`
        // prevents any `&mut` from being handed out concurrently.
        unsafe { self.ptr.as_ref() }
    }

    pub(crate) fn get_mut(&mut self) -> &mut T {
        // SAFETY: live and uniquely owned; `&mut self` makes this the only
        // reference.
        unsafe { self.ptr.as_mut() }
    }

    /// Give up ownership without releasing anything.
    pub(crate) fn into_raw(self) -> *mut T {
        ManuallyDrop::new(self).ptr.as_ptr()
    }

    pub(crate) fn into_box(self) -> Box<T> {
        let ptr = self.into_raw();
        // SAFETY: `ptr` came from a `Box<T>` and ownership was just given up
        // by `into_raw`, so rebuilding the box is the single release.
        unsafe { Box::from_raw(ptr) }
    }
}

impl<T> Drop for RawBox<T> {
    fn drop(&mut self) {
        // SAFETY: the allocation is owned by `self` alone and this is the
        // last use of `ptr`. Dropping the box drops the `T` and then frees
        // the allocation.
        drop(unsafe { Box::from_raw(self.ptr.as_ptr()) });
    }
}

// SAFETY: `RawBox<T>` is a unique owner of a `T`, like `Box<T>`, and
// inherits the same thread-safety.
unsafe impl<T: Send> Send for RawBox<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for RawBox<T> {}
