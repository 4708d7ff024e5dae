//! Core types and traits for the Holdfast ownership primitives.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by the container crates: the [`ArrayError`] type reported
//! by checked access, and the [`Element`] capability trait that states what
//! a bounded container requires of its element type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::ArrayError;
pub use traits::Element;
