// src/crawl/visited.rs
// =============================================================================
// The set of pages already claimed during one crawl.
//
// Every branch of the traversal races to claim the URLs it discovers. The
// claim has to be a single atomic step: if "is it visited?" and "mark it
// visited" were separate, two branches could both see "not visited", both
// crawl the page, and on a cyclic site keep re-entering each other.
//
// One VisitedSet is created per crawl and shared down the recursion behind
// an Arc. Nothing outlives the crawl, so independent crawls (and tests)
// never see each other's pages.
//
// An optional capacity turns the set into the crawl's page cap: once that
// many identifiers have been claimed, every further claim fails.
// =============================================================================

use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct VisitedSet {
    claimed: Mutex<HashSet<String>>,
    capacity: Option<usize>,
}

impl VisitedSet {
    /// An unbounded set
    pub fn new() -> Self {
        Self::default()
    }

    /// A set that refuses claims once `capacity` identifiers are held
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            claimed: Mutex::new(HashSet::new()),
            capacity,
        }
    }

    /// Claims `id` for crawling.
    ///
    /// Returns true exactly once per identifier, to whichever caller gets
    /// there first. Returns false, and changes nothing, if the identifier
    /// is already claimed or the capacity is used up.
    pub fn try_claim(&self, id: &str) -> bool {
        // A panic elsewhere while holding the lock cannot leave the set
        // half-updated, so a poisoned lock is still safe to use
        let mut claimed = self.claimed.lock().unwrap_or_else(|e| e.into_inner());

        if claimed.contains(id) {
            return false;
        }
        if let Some(limit) = self.capacity {
            if claimed.len() >= limit {
                return false;
            }
        }
        claimed.insert(id.to_string())
    }

    /// Number of identifiers claimed so far
    pub fn len(&self) -> usize {
        self.claimed.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why std::sync::Mutex and not tokio::sync::Mutex?
//    - The lock is held for one lookup + insert, never across an .await
//    - A blocking mutex is the cheaper choice for such short sections
//
// 2. Why does try_claim take &self?
//    - The Mutex provides interior mutability
//    - All branches share one Arc<VisitedSet> and call it concurrently
// -----------------------------------------------------------------------------
