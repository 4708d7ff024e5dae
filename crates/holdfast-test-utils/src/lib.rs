//! Test utilities and fixtures for Holdfast development.
//!
//! - [`CountingAllocator`]: a global allocator wrapper that counts
//!   allocations per thread, for asserting that a handle releases its
//!   storage exactly once.
//! - [`DropTracker`] / [`Tracked`]: values that record when they are
//!   dropped, and in which order.
//! - [`Pair`]: a two-field value type for generic instantiation tests.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc;
pub mod fixtures;

pub use alloc::{measure, snapshot, AllocSnapshot, CountingAllocator};
pub use fixtures::{arb_pair, DropTracker, Pair, Tracked};
