//! Test fixtures for Gravel development.
//!
//! Three standard fixtures for failure-safety and drop-accounting tests:
//!
//! - [`DropTally`] / [`Tracked`] — counts live instances and drops.
//! - [`FailingAlloc`] — allocator that fails deterministically after N
//!   allocations.
//! - [`countdown_maker`] — fallible element producer that errors after N
//!   constructions.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod fixtures;

pub use fixtures::{countdown_maker, DropTally, FailingAlloc, MakeFailed, Tracked};
