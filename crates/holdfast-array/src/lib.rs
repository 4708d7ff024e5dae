//! Fixed-capacity, bounds-checked heap array.
//!
//! [`BoundedArray<T>`] owns one contiguous heap allocation holding exactly
//! `capacity` elements, all default-constructed when the array is built.
//! The capacity never changes. Every indexed access is checked and reports
//! [`ArrayError::IndexOutOfRange`] instead of panicking; there is no
//! unchecked path.
//!
//! ```
//! use holdfast_array::{ArrayError, BoundedArray};
//!
//! let mut a = BoundedArray::<i32>::new(3);
//! *a.at_mut(0)? = 1;
//! *a.at_mut(1)? = 2;
//! assert_eq!(*a.at(0)?, 1);
//! assert_eq!(*a.at(1)?, 2);
//! assert_eq!(
//!     a.at(3),
//!     Err(ArrayError::IndexOutOfRange { index: 3, capacity: 3 })
//! );
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events when an array is built, when a bounds
//!   check rejects an index, and when fallible construction fails.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod trace;

pub mod array;
pub mod config;

pub use array::{BoundedArray, Iter};
pub use config::ArrayConfig;
pub use holdfast_core::{ArrayError, Element};
