//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors from raw storage allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The allocator could not provide the requested storage.
    Exhausted {
        /// Number of bytes requested.
        bytes: usize,
    },
    /// The requested element count has no representable memory layout.
    LayoutOverflow {
        /// Number of elements requested.
        elements: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
            Self::LayoutOverflow { elements } => {
                write!(f, "no representable layout for {elements} elements")
            }
        }
    }
}

impl Error for AllocError {}
