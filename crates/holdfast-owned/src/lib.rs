//! Single-owner heap handle.
//!
//! [`Owned<T>`] holds exactly one heap allocation of a `T` and releases it
//! exactly once, when the handle is dropped. It is move-only: there is no
//! `Clone`, so two handles can never own the same allocation, and the
//! compiler rejects any use of a handle after it has been moved.
//!
//! ```
//! use holdfast_owned::Owned;
//!
//! let mut p = Owned::new(0_i32);
//! *p = 100;
//! assert_eq!(*p, 100);
//!
//! // Ownership moves with the value.
//! let q = p;
//! assert_eq!(*q, 100);
//! // `q` is released here.
//! ```
//!
//! An empty handle is spelled `Option<Owned<T>>`. The pointer inside is
//! never null, so the option is the same size as a bare pointer:
//!
//! ```
//! use holdfast_owned::Owned;
//!
//! assert_eq!(
//!     std::mem::size_of::<Option<Owned<u64>>>(),
//!     std::mem::size_of::<*mut u64>(),
//! );
//! ```
//!
//! # Safety
//!
//! All `unsafe` code in this crate lives in the private `raw` module, each
//! block with a `// SAFETY:` comment. The only `unsafe` entry point in the
//! public API is [`Owned::from_raw`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod owned;
mod raw;

pub use owned::Owned;
