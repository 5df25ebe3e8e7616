//! In-memory listing store
//!
//! Holds the ordered sequence of listings for one session. Listings are only
//! ever inserted (newest first) and read back; there is no update, delete, or
//! persistence. The store never tracks live vote tallies.

use chrono::Utc;

use crate::error::Result;
use crate::models::{Listing, ListingId, ListingSubmission};

/// Session-scoped listing store.
#[derive(Debug, Default, Clone)]
pub struct ListingStore {
    listings: Vec<Listing>,
    last_issued_millis: i64,
}

impl ListingStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given listings, newest first.
    #[must_use]
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            last_issued_millis: 0,
        }
    }

    /// Validate a submission and prepend the resulting listing.
    ///
    /// On validation failure the store is left untouched. The new listing is
    /// placed at the head of the sequence regardless of any sort ordering a
    /// view applies later.
    pub fn add_listing(&mut self, submission: ListingSubmission) -> Result<&Listing> {
        let id = self.issue_id();
        let listing = submission.into_listing(id)?;

        tracing::debug!(id = %listing.id, title = %listing.title, "listing added");
        self.listings.insert(0, listing);
        Ok(&self.listings[0])
    }

    /// Read-only snapshot of the current sequence, newest first.
    #[must_use]
    pub fn list_all(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a listing by id.
    #[must_use]
    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Issue a timestamp-derived id, bumping past the previous one so two
    /// adds within the same millisecond still get distinct ids.
    fn issue_id(&mut self) -> ListingId {
        let now = Utc::now().timestamp_millis();
        self.last_issued_millis = now.max(self.last_issued_millis + 1);
        ListingId::from_millis(self.last_issued_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::seed::seed_listings;
    use pretty_assertions::assert_eq;

    fn submission(title: &str) -> ListingSubmission {
        ListingSubmission {
            title: Some(title.to_string()),
            price: Some("100000".to_string()),
            location: Some("X".to_string()),
            ..ListingSubmission::default()
        }
    }

    #[test]
    fn add_listing_prepends() {
        let mut store = ListingStore::with_listings(seed_listings());
        let before = store.len();

        let id = store.add_listing(submission("T")).unwrap().id.clone();

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.list_all()[0].id, id);
        assert_eq!(store.list_all()[0].title, "T");
    }

    #[test]
    fn rejected_submission_leaves_store_unchanged() {
        let mut store = ListingStore::with_listings(seed_listings());
        let before = store.list_all().to_vec();

        let submission = ListingSubmission {
            title: Some(String::new()),
            price: Some("100000".to_string()),
            location: Some("X".to_string()),
            ..ListingSubmission::default()
        };
        let error = store.add_listing(submission).unwrap_err();

        assert_eq!(error, Error::Validation(vec!["title".to_string()]));
        assert_eq!(store.list_all(), before.as_slice());
    }

    #[test]
    fn issued_ids_are_unique_and_increasing() {
        let mut store = ListingStore::new();
        let first = store.add_listing(submission("A")).unwrap().id.clone();
        let second = store.add_listing(submission("B")).unwrap().id.clone();

        assert_ne!(first, second);
        assert!(second.recency_rank() > first.recency_rank());
    }

    #[test]
    fn get_finds_seeded_listing() {
        let store = ListingStore::with_listings(seed_listings());
        let listing = store.get(&ListingId::from("2")).unwrap();
        assert_eq!(listing.location, "Birmingham City Centre");
        assert!(store.get(&ListingId::from("missing")).is_none());
    }
}
