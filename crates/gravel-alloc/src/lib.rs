//! Allocator abstraction and uninitialized-memory primitives for the
//! Gravel container library.
//!
//! Three layers, bottom up:
//!
//! - [`heap`] — the [`RawAlloc`] trait (raw storage in, raw storage out,
//!   no element lifetimes) and the default [`Heap`] implementation.
//! - [`slot`] — begin/end the lifetime of a single value, or a range of
//!   values, at a raw address.
//! - [`uninit`] — bulk construction into uninitialized storage: fill,
//!   clone, block copy, and relocation, with explicit rollback of the
//!   constructed prefix when a construction fails mid-sequence.
//!
//! # Safety
//!
//! This crate is one of the two in the workspace that contain `unsafe`
//! code (along with the buffer internals of `gravel-array`). Every unsafe
//! block carries a `SAFETY:` comment; the `unsafe fn` contracts are
//! documented on each function.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod heap;
pub mod slot;
pub mod uninit;

pub use error::AllocError;
pub use heap::{array_layout, Heap, RawAlloc};
