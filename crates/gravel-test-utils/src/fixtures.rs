//! Reusable container test fixtures.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::error::Error;
use std::fmt;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gravel_alloc::{AllocError, Heap, RawAlloc};

/// Shared drop-accounting state for [`Tracked`] values.
///
/// Hand out elements with [`track`](DropTally::track); assert on
/// [`live`](DropTally::live) and [`drops`](DropTally::drops) after the
/// operation under test. Every construction (including clones) increments
/// the live count, every drop decrements it, so a correct container always
/// returns the tally to zero when it goes away.
#[derive(Clone, Default)]
pub struct DropTally {
    live: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl DropTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a tracked element carrying `value`.
    pub fn track(&self, value: u64) -> Tracked {
        self.live.fetch_add(1, Ordering::SeqCst);
        Tracked {
            value,
            tally: self.clone(),
        }
    }

    /// Number of currently live tracked instances.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Total number of drops observed.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// An element whose constructions and drops are counted by a [`DropTally`].
#[derive(Debug)]
pub struct Tracked {
    pub value: u64,
    tally: DropTally,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.tally.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tally.live.fetch_sub(1, Ordering::SeqCst);
        self.tally.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl fmt::Debug for DropTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropTally")
            .field("live", &self.live())
            .field("drops", &self.drops())
            .finish()
    }
}

/// Allocator that fails deterministically after N successful allocations.
///
/// Delegates to [`Heap`] while the budget lasts, then returns
/// [`AllocError::Exhausted`] for every further request. Deallocation
/// always succeeds (storage that was handed out must be returnable).
#[derive(Debug)]
pub struct FailingAlloc {
    remaining: AtomicUsize,
}

impl FailingAlloc {
    /// Allow `n` allocations before failing.
    pub fn after(n: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(n),
        }
    }

    /// Fail every allocation from the start.
    pub fn exhausted() -> Self {
        Self::after(0)
    }

    /// Number of allocations still allowed.
    pub fn budget(&self) -> usize {
        self.remaining.load(Ordering::SeqCst)
    }
}

// SAFETY: delegates storage to `Heap`, which upholds the contract; a
// failure result hands out no storage at all.
unsafe impl RawAlloc for FailingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !allowed {
            return Err(AllocError::Exhausted {
                bytes: layout.size(),
            });
        }
        Heap.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded caller contract; successful allocations came
        // from `Heap`.
        unsafe { Heap.deallocate(ptr, layout) }
    }
}

/// Marker error produced by [`countdown_maker`] when its budget runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MakeFailed;

impl fmt::Display for MakeFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element construction refused")
    }
}

impl Error for MakeFailed {}

/// A fallible element producer that succeeds `allowed` times, then returns
/// [`MakeFailed`] forever.
///
/// Drives the rollback paths of the bulk construction algorithms without
/// resorting to panics.
pub fn countdown_maker<T, F>(
    allowed: usize,
    mut make: F,
) -> impl FnMut(usize) -> Result<T, MakeFailed>
where
    F: FnMut(usize) -> T,
{
    let mut made = 0;
    move |i| {
        if made == allowed {
            return Err(MakeFailed);
        }
        made += 1;
        Ok(make(i))
    }
}
