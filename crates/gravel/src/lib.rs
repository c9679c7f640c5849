//! Gravel: a growable contiguous-storage container over pluggable
//! allocators.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Gravel sub-crates. For most users, adding `gravel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gravel::prelude::*;
//!
//! let mut values: Array<u32> = Array::new();
//! for i in 1..=20 {
//!     values.push(i).unwrap();
//! }
//! assert_eq!(values.len(), 20);
//! assert!(values.capacity() >= 20);
//!
//! values.insert(0, 0).unwrap();
//! values.remove_range(5..10);
//! assert_eq!(values.at(0), Ok(&0));
//! assert!(values.at(values.len()).is_err());
//!
//! // The whole slice API is available through deref.
//! values.sort_unstable();
//! assert_eq!(values.first(), Some(&0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`container`] | `gravel-array` | [`container::Array`], [`container::IntoIter`], the [`array!`](prelude::array) macro |
//! | [`alloc`] | `gravel-alloc` | [`alloc::RawAlloc`], [`alloc::Heap`], slot and bulk-construction primitives |
//! | [`policy`] | `gravel-core` | Growth policy, capability classification, capacity error |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The container and its owned iterator (`gravel-array`).
///
/// Most users only need [`container::Array`] from this module — it is
/// also available in the [`prelude`].
pub use gravel_array as container;

/// Allocator abstraction and uninitialized-memory primitives
/// (`gravel-alloc`).
///
/// Implement [`alloc::RawAlloc`] to plug a custom allocator into
/// [`container::Array`].
pub use gravel_alloc as alloc;

/// Growth policy and capability classification (`gravel-core`).
///
/// Contains the growth-policy constants ([`policy::MIN_CAPACITY`]), the
/// pure growth function, and the source/element capability queries.
pub use gravel_core as policy;

/// Common imports for typical Gravel usage.
///
/// ```rust
/// use gravel::prelude::*;
///
/// let values = array![1, 2, 3];
/// assert_eq!(values, [1, 2, 3]);
/// ```
///
/// This imports the container, its error types, the allocator seam, the
/// default heap allocator, and the `array!` macro.
pub mod prelude {
    pub use gravel_alloc::{AllocError, Heap, RawAlloc};
    pub use gravel_array::{array, Array, ArrayError, IntoIter};
    pub use gravel_core::CapacityError;
}
