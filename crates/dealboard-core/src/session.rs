//! Session context
//!
//! Owns all mutable state for one sitting: the listing store, the live vote
//! board, and the selected sort key. A session begins seeded (or empty) and
//! everything in it is gone when it is dropped; there is no persistence.
//!
//! The methods here are the callback contract presentation surfaces program
//! against: submit a listing, click a vote, pick a sort key, re-read the
//! ordered view.

use crate::error::{Error, Result};
use crate::models::{Listing, ListingId, ListingSubmission};
use crate::sort::{project, SortKey};
use crate::store::ListingStore;
use crate::vote::{VoteBoard, VoteDirection, VoteState};

/// All state for one user's sitting with the board.
#[derive(Debug, Default, Clone)]
pub struct Session {
    store: ListingStore,
    votes: VoteBoard,
    sort_key: SortKey,
}

impl Session {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session populated with the stock seed listings.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            store: ListingStore::with_listings(crate::seed::seed_listings()),
            votes: VoteBoard::new(),
            sort_key: SortKey::default(),
        }
    }

    /// Submission callback: validate and add a new listing.
    ///
    /// Returns the fully-formed listing for display. On validation failure
    /// nothing changes and the error names the offending fields.
    pub fn submit_listing(&mut self, submission: ListingSubmission) -> Result<Listing> {
        let listing = self.store.add_listing(submission)?;
        tracing::info!(id = %listing.id, "listing submitted");
        Ok(listing.clone())
    }

    /// Vote-click callback: apply one click against a listing's tally.
    pub fn vote(&mut self, id: &ListingId, direction: VoteDirection) -> Result<VoteState> {
        let listing = self
            .store
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.votes.vote(listing, direction))
    }

    /// Sort-selection callback.
    pub fn set_sort_key(&mut self, key: SortKey) {
        tracing::debug!(%key, "sort key changed");
        self.sort_key = key;
    }

    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The board as currently displayed: the store projected under the
    /// selected sort key. Recomputed on every call, never cached.
    #[must_use]
    pub fn view(&self) -> Vec<Listing> {
        project(self.store.list_all(), self.sort_key)
    }

    /// Raw store sequence, newest first, ignoring the sort key.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        self.store.list_all()
    }

    /// Live tally for a listing already in hand (e.g. while rendering a
    /// projected view).
    #[must_use]
    pub fn tally_for(&self, listing: &Listing) -> VoteState {
        self.votes.tally(listing)
    }

    /// Live tally for one listing by id.
    pub fn tally(&self, id: &ListingId) -> Result<VoteState> {
        let listing = self
            .store
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.votes.tally(listing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn submission(title: &str, price: &str, location: &str) -> ListingSubmission {
        ListingSubmission {
            title: Some(title.to_string()),
            price: Some(price.to_string()),
            location: Some(location.to_string()),
            ..ListingSubmission::default()
        }
    }

    #[test]
    fn seeded_session_starts_on_votes_ordering() {
        let session = Session::seeded();
        assert_eq!(session.sort_key(), SortKey::Votes);

        let view = session.view();
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].initial_votes, 47);
    }

    #[test]
    fn submitted_listing_heads_the_raw_sequence() {
        let mut session = Session::seeded();
        let listing = session
            .submit_listing(submission("T", "100000", "X"))
            .unwrap();

        assert_eq!(session.listings().len(), 4);
        assert_eq!(session.listings()[0].id, listing.id);
    }

    #[test]
    fn rejected_submission_changes_nothing() {
        let mut session = Session::seeded();
        let error = session
            .submit_listing(submission("", "100000", "X"))
            .unwrap_err();

        assert_eq!(error, Error::Validation(vec!["title".to_string()]));
        assert_eq!(session.listings().len(), 3);
    }

    #[test]
    fn vote_on_unknown_listing_is_not_found() {
        let mut session = Session::seeded();
        let error = session
            .vote(&ListingId::from("nope"), VoteDirection::Up)
            .unwrap_err();
        assert_eq!(error, Error::NotFound("nope".to_string()));
    }

    #[test]
    fn voting_updates_tally_but_not_view_ordering() {
        let mut session = Session::seeded();
        let cold = ListingId::from("3");

        // Pile votes onto the coldest listing.
        for _ in 0..2 {
            session.vote(&cold, VoteDirection::Up).unwrap();
            session.vote(&cold, VoteDirection::Down).unwrap();
        }
        session.vote(&cold, VoteDirection::Up).unwrap();

        assert_eq!(session.tally(&cold).unwrap().votes, 13);
        // The votes ordering still reads seed counts, so "3" stays last.
        let view = session.view();
        assert_eq!(view[2].id, cold);
    }

    #[test]
    fn sort_key_switch_reorders_view() {
        let mut session = Session::seeded();
        session.set_sort_key(SortKey::Price);

        let prices: Vec<u64> = session.view().iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![195_000, 285_000, 320_000]);
    }

    #[test]
    fn new_submission_wins_recent_ordering() {
        let mut session = Session::seeded();
        let listing = session
            .submit_listing(submission("T", "100000", "X"))
            .unwrap();
        session.set_sort_key(SortKey::Recent);

        assert_eq!(session.view()[0].id, listing.id);
    }
}
