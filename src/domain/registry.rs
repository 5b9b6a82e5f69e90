//! In-memory store mapping short codes to URL records and access counters.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::domain::allocator::IdentifierAllocator;
use crate::domain::entities::LinkRecord;
use crate::utils::base62;

/// Combined URL-mapping and counter store.
///
/// Both maps are lock-striped (`DashMap`), so operations on unrelated codes
/// never contend, and each counter is an `AtomicU64`, so concurrent accesses
/// to the same code never lose increments. A code is present in `hits` iff
/// it is present in `links`: both entries are inserted before [`Self::create`]
/// returns, and nothing is ever removed.
pub struct CodeRegistry {
    allocator: IdentifierAllocator,
    links: DashMap<String, LinkRecord>,
    hits: DashMap<String, AtomicU64>,
}

impl CodeRegistry {
    /// Creates an empty registry with a fresh identifier sequence.
    pub fn new() -> Self {
        Self {
            allocator: IdentifierAllocator::new(),
            links: DashMap::new(),
            hits: DashMap::new(),
        }
    }

    /// Shortens a URL: allocates a fresh identifier, encodes it, and stores
    /// the record alongside a zeroed access counter. Returns the new code.
    ///
    /// Never fails and never collides — identifiers are strictly increasing
    /// and the encoding is injective, so no retry logic exists. The URL is
    /// stored as-is.
    pub fn create(&self, long_url: String) -> String {
        let code = base62::encode(self.allocator.next_id());

        // Counter goes in first: any thread that can resolve the code can
        // also record an access against it.
        self.hits.insert(code.clone(), AtomicU64::new(0));
        self.links.insert(code.clone(), LinkRecord::new(long_url));

        code
    }

    /// Looks up the record for a code. Pure read: the access counter is not
    /// touched.
    pub fn resolve(&self, code: &str) -> Option<LinkRecord> {
        self.links.get(code).map(|entry| entry.value().clone())
    }

    /// Increments the access counter for an existing code and returns the
    /// new total.
    ///
    /// Returns `None` for unknown codes without creating a phantom entry.
    pub fn record_and_count(&self, code: &str) -> Option<u64> {
        self.hits
            .get(code)
            .map(|counter| counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Current access count for a code. Read-only: a stats query never
    /// counts as an access.
    pub fn count(&self, code: &str) -> Option<u64> {
        self.hits
            .get(code)
            .map(|counter| counter.load(Ordering::Relaxed))
    }

    /// Number of links stored. Surfaced by the health check.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
