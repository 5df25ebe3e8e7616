//! Vote tally
//!
//! Per-listing vote counts are session state, kept apart from the immutable
//! [`Listing`] record: they seed from `initial_votes`, never write back to
//! the store, and vanish with the session. Sorting by votes therefore uses
//! the seed value, not the live tally.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Listing, ListingId};

/// Direction of a single vote click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Signed step applied to a tally for a fresh vote in this direction.
    const fn step(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// One viewer's live tally for one listing.
///
/// A three-state machine over `user_vote` with two triggers (click up, click
/// down). Every transition is reversible: replaying a click sequence in
/// reverse returns `votes` to its starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteState {
    pub votes: i64,
    pub user_vote: Option<VoteDirection>,
}

impl VoteState {
    /// Starting state for a listing: its seed count and no vote cast.
    #[must_use]
    pub const fn seeded(initial_votes: i64) -> Self {
        Self {
            votes: initial_votes,
            user_vote: None,
        }
    }

    /// Apply one click and return the next state.
    ///
    /// Clicking the direction already held removes the vote; clicking the
    /// opposite direction flips it (a two-point swing); clicking with no
    /// vote held casts one.
    #[must_use]
    pub fn apply(self, direction: VoteDirection) -> Self {
        let step = direction.step();
        match self.user_vote {
            Some(held) if held == direction => Self {
                votes: self.votes - step,
                user_vote: None,
            },
            Some(_) => Self {
                votes: self.votes + 2 * step,
                user_vote: Some(direction),
            },
            None => Self {
                votes: self.votes + step,
                user_vote: Some(direction),
            },
        }
    }
}

/// Session-scoped map of live tallies, keyed by listing id.
#[derive(Debug, Default, Clone)]
pub struct VoteBoard {
    states: HashMap<ListingId, VoteState>,
}

impl VoteBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tally for a listing, seeding from `initial_votes` if the
    /// viewer has not interacted with it yet.
    #[must_use]
    pub fn tally(&self, listing: &Listing) -> VoteState {
        self.states
            .get(&listing.id)
            .copied()
            .unwrap_or_else(|| VoteState::seeded(listing.initial_votes))
    }

    /// Apply one click against a listing and return the new state.
    pub fn vote(&mut self, listing: &Listing, direction: VoteDirection) -> VoteState {
        let next = self.tally(listing).apply(direction);
        tracing::debug!(id = %listing.id, ?direction, votes = next.votes, "vote applied");
        self.states.insert(listing.id.clone(), next);
        next
    }
}
