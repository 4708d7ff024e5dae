//! Holdfast: single-owner heap handles and bounds-checked arrays.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Holdfast sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use holdfast::prelude::*;
//!
//! // One owner, one release.
//! let mut p = Owned::new(0_i32);
//! *p = 100;
//! assert_eq!(*p, 100);
//!
//! // Fixed capacity, every access checked.
//! let mut a = BoundedArray::<i32>::new(3);
//! *a.at_mut(0)? = 1;
//! *a.at_mut(1)? = 2;
//! assert_eq!((*a.at(0)?, *a.at(1)?), (1, 2));
//! assert!(matches!(a.at(3), Err(ArrayError::IndexOutOfRange { index: 3, .. })));
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! The two primitives are independent; they compose like any other owned
//! types. An array of handles releases each handle's allocation before the
//! array's own storage:
//!
//! ```rust
//! use holdfast::prelude::*;
//!
//! let mut handles = BoundedArray::<Option<Owned<String>>>::new(2);
//! handles.set(0, Some(Owned::new("first".to_string())))?;
//! assert_eq!(handles.at(0)?.as_deref().map(String::as_str), Some("first"));
//! assert!(handles.at(1)?.is_none());
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `holdfast-core` | `ArrayError`, the `Element` capability trait |
//! | [`owned`] | `holdfast-owned` | `Owned<T>` single-owner handle |
//! | [`array`] | `holdfast-array` | `BoundedArray<T>`, `ArrayConfig` |
//!
//! # Features
//!
//! - `tracing`: forward to `holdfast-array/tracing`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error type and capability traits (`holdfast-core`).
pub use holdfast_core as types;

/// Single-owner heap handle (`holdfast-owned`).
pub use holdfast_owned as owned;

/// Fixed-capacity bounds-checked array (`holdfast-array`).
pub use holdfast_array as array;

/// Common imports.
///
/// ```rust
/// use holdfast::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use holdfast_core::{ArrayError, Element};

    // Handles
    pub use holdfast_owned::Owned;

    // Arrays
    pub use holdfast_array::{ArrayConfig, BoundedArray};
}
