//! Container error type.

use std::error::Error;
use std::fmt;

use gravel_alloc::AllocError;
use gravel_core::CapacityError;

/// Errors from container operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access used an index at or past the live length.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Live element count at the time of the access.
        len: usize,
    },
    /// A requested capacity exceeds the maximum element count for the
    /// element type.
    Capacity(CapacityError),
    /// The allocator failed to provide storage.
    Alloc(AllocError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Capacity(err) => write!(f, "{err}"),
            Self::Alloc(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Capacity(err) => Some(err),
            Self::Alloc(err) => Some(err),
        }
    }
}

impl From<CapacityError> for ArrayError {
    fn from(err: CapacityError) -> Self {
        Self::Capacity(err)
    }
}

impl From<AllocError> for ArrayError {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}
