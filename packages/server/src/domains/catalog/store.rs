//! In-memory catalog store.

use std::sync::RwLock;

use crate::common::ListingId;

use super::models::Listing;
use super::seed::seed_listings;

/// The authoritative collection of listings.
///
/// An insertion-ordered sequence, newest first. Listings are never mutated
/// or removed; lifetime is the lifetime of the process (reset on restart).
/// The `RwLock` is the only concurrency control the design needs - a single
/// writer path (submission) and read-only queries.
pub struct CatalogStore {
    listings: RwLock<Vec<Listing>>,
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(Vec::new()),
        }
    }

    /// Create a catalog pre-populated with the demo listings.
    pub fn seeded() -> Self {
        Self {
            listings: RwLock::new(seed_listings()),
        }
    }

    /// Prepend a fully-populated listing.
    ///
    /// Infallible: validation happened in the submission workflow.
    pub fn add(&self, listing: Listing) {
        let mut listings = self.listings.write().expect("catalog lock poisoned");
        listings.insert(0, listing);
    }

    /// Snapshot of the current catalog, newest first.
    pub fn all(&self) -> Vec<Listing> {
        self.listings
            .read()
            .expect("catalog lock poisoned")
            .clone()
    }

    /// Look up one listing by id.
    pub fn get(&self, id: ListingId) -> Option<Listing> {
        self.listings
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .find(|l| l.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.listings.read().expect("catalog lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
