//! Amortized growth policy.
//!
//! Every reallocating container operation funnels through
//! [`grow_capacity`], which maps (current length, required additional
//! slots) to the next allocation size. The policy grows by 1.5× in the
//! common case, falls back to exact growth near the representable ceiling,
//! and starts from a fixed minimum so that short-lived containers do not
//! churn through tiny allocations.

use crate::error::CapacityError;

/// Capacity floor for the first allocation.
///
/// A freshly constructed container allocates this many slots up front, and
/// growth from empty never produces a smaller buffer.
pub const MIN_CAPACITY: usize = 16;

/// Extra slots granted on top of an exact-growth request near the ceiling,
/// when they still fit.
pub const GROWTH_HEADROOM: usize = 16;

/// Maximum element count representable in a single allocation for an
/// element of `elem_size` bytes.
///
/// Single allocations are limited to `isize::MAX` bytes, so the ceiling is
/// `isize::MAX / elem_size`.
///
/// # Panics
///
/// Panics if `elem_size` is zero. Zero-sized element types are unsupported
/// throughout the library; the buffer layer rejects them at compile time.
#[must_use]
pub const fn max_elements(elem_size: usize) -> usize {
    assert!(elem_size > 0, "zero-sized element types are unsupported");
    isize::MAX as usize / elem_size
}

/// Compute the next capacity for a buffer of `len` live elements that
/// needs room for `additional` more, under the ceiling `max`.
///
/// Policy:
/// - errors when `len + additional` exceeds `max` (or overflows);
/// - when `len` is past the point where 1.5× growth would overflow `max`,
///   grows to exactly `len + additional`, plus [`GROWTH_HEADROOM`] when
///   that still fits under `max`;
/// - otherwise grows to `max(1.5 × len, len + additional)`, with a floor
///   of [`MIN_CAPACITY`] when starting from empty.
///
/// The returned capacity always satisfies
/// `len + additional <= capacity <= max`.
pub fn grow_capacity(
    len: usize,
    additional: usize,
    max: usize,
) -> Result<usize, CapacityError> {
    let required = match len.checked_add(additional) {
        Some(required) if required <= max => required,
        _ => {
            return Err(CapacityError {
                requested: len.saturating_add(additional),
                max,
            })
        }
    };
    if len > max - len / 2 {
        // 1.5x growth would overshoot the ceiling; grow by exactly what was
        // asked, with a little headroom when it fits.
        if required <= max.saturating_sub(GROWTH_HEADROOM) {
            return Ok(required + GROWTH_HEADROOM);
        }
        return Ok(required);
    }
    let grown = if len == 0 {
        MIN_CAPACITY.max(additional)
    } else {
        (len + len / 2).max(required)
    };
    Ok(grown.min(max))
}
