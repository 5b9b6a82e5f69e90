//! Monotonic identifier allocation.

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of unique, strictly increasing identifiers.
///
/// Backed by a single `AtomicU64` that starts at 1 and is only ever advanced
/// by `fetch_add`. Two concurrent callers never observe the same value, and
/// there is no lock to serialize on.
#[derive(Debug)]
pub struct IdentifierAllocator {
    next: AtomicU64,
}

impl IdentifierAllocator {
    /// Creates an allocator whose first identifier is 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next identifier.
    ///
    /// Strictly greater than every previously returned value. Relaxed
    /// ordering suffices: `fetch_add` participates in the atomic's total
    /// modification order, which is the only guarantee callers rely on.
    pub fn next_id(&self) -> NonZeroU64 {
        let id = self.next.fetch_add(1, Ordering::Relaxed);

        // The counter starts at 1 and only grows; 64-bit wraparound is
        // unreachable in practice.
        NonZeroU64::new(id).expect("identifier sequence starts at 1")
    }
}

impl Default for IdentifierAllocator {
    fn default() -> Self {
        Self::new()
    }
}
