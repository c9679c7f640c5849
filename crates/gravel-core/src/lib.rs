//! Capability classification and growth policy for the Gravel container
//! library.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! compile-time classifications that the bulk memory algorithms dispatch
//! on, the amortized growth policy shared by every reallocating container
//! operation, and the capacity error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod caps;
pub mod error;
pub mod growth;

pub use caps::{plain_data, source_len, SourceLen};
pub use error::CapacityError;
pub use growth::{grow_capacity, max_elements, GROWTH_HEADROOM, MIN_CAPACITY};
