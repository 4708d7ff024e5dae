//! Allocation counting.
//!
//! Install [`CountingAllocator`] in a test binary to make [`snapshot`] and
//! [`measure`] report real numbers:
//!
//! ```ignore
//! use holdfast_test_utils::CountingAllocator;
//!
//! #[global_allocator]
//! static ALLOC: CountingAllocator = CountingAllocator::new();
//! ```
//!
//! Counters are per thread. The test harness runs tests on separate
//! threads, so one test never sees another test's allocations.

#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    // `const` init: no lazy registration, so the allocator can touch it
    // without recursing into itself.
    static COUNTS: Cell<AllocSnapshot> = const { Cell::new(AllocSnapshot::ZERO) };
}

/// Allocation counters for the current thread.
///
/// Counters only ever grow; take two snapshots and compare them with
/// [`AllocSnapshot::since`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocSnapshot {
    /// Successful `alloc`/`alloc_zeroed` calls.
    pub allocations: usize,
    /// `dealloc` calls.
    pub deallocations: usize,
    /// Successful `realloc` calls.
    pub reallocations: usize,
    /// Bytes handed out by `alloc`/`alloc_zeroed`.
    pub bytes_allocated: usize,
    /// Bytes returned by `dealloc`.
    pub bytes_freed: usize,
}

impl AllocSnapshot {
    const ZERO: Self = Self {
        allocations: 0,
        deallocations: 0,
        reallocations: 0,
        bytes_allocated: 0,
        bytes_freed: 0,
    };

    /// Counter increase between `earlier` and `self`.
    pub fn since(&self, earlier: &AllocSnapshot) -> AllocSnapshot {
        AllocSnapshot {
            allocations: self.allocations.wrapping_sub(earlier.allocations),
            deallocations: self.deallocations.wrapping_sub(earlier.deallocations),
            reallocations: self.reallocations.wrapping_sub(earlier.reallocations),
            bytes_allocated: self.bytes_allocated.wrapping_sub(earlier.bytes_allocated),
            bytes_freed: self.bytes_freed.wrapping_sub(earlier.bytes_freed),
        }
    }

    /// Allocations not yet freed (negative if more was freed than allocated).
    pub fn live_allocations(&self) -> isize {
        self.allocations as isize - self.deallocations as isize
    }

    /// Whether everything allocated was also freed.
    pub fn is_balanced(&self) -> bool {
        self.allocations == self.deallocations && self.bytes_allocated == self.bytes_freed
    }
}

fn record(update: impl FnOnce(&mut AllocSnapshot)) {
    // `try_with` fails only during thread teardown; those events are not
    // interesting to any test.
    let _ = COUNTS.try_with(|cell| {
        let mut counts = cell.get();
        update(&mut counts);
        cell.set(counts);
    });
}

/// Current thread's counters.
///
/// All zero unless [`CountingAllocator`] is the global allocator.
pub fn snapshot() -> AllocSnapshot {
    COUNTS.try_with(Cell::get).unwrap_or_default()
}

/// Run `f` and return its result together with the allocations it made.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, AllocSnapshot) {
    let before = snapshot();
    let result = f();
    let after = snapshot();
    (result, after.since(&before))
}

/// [`System`] allocator wrapper that counts every call per thread.
#[derive(Debug, Default)]
pub struct CountingAllocator;

impl CountingAllocator {
    pub const fn new() -> Self {
        CountingAllocator
    }
}

// SAFETY: every call is forwarded unchanged to `System`; counting does not
// allocate and does not touch the returned memory.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's layout.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(|c| {
                c.allocations += 1;
                c.bytes_allocated += layout.size();
            });
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's layout.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(|c| {
                c.allocations += 1;
                c.bytes_allocated += layout.size();
            });
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was allocated by `System` through this wrapper.
        unsafe { System.dealloc(ptr, layout) };
        record(|c| {
            c.deallocations += 1;
            c.bytes_freed += layout.size();
        });
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: `ptr` was allocated by `System` through this wrapper.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(|c| {
                c.reallocations += 1;
                c.bytes_allocated += new_size;
                c.bytes_freed += layout.size();
            });
        }
        new_ptr
    }
}
