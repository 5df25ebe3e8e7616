//! Sort projection
//!
//! Pure mapping from (listing slice, sort key) to a freshly ordered `Vec`.
//! The underlying store is never mutated; views recompute the projection on
//! every render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::Listing;

/// Display ordering for the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest seed vote count first
    #[default]
    Votes,
    /// Cheapest first
    Price,
    /// Newest first, by numeric interpretation of the id
    Recent,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Votes => "votes",
            Self::Price => "price",
            Self::Recent => "recent",
        };
        write!(f, "{label}")
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "votes" => Ok(Self::Votes),
            "price" => Ok(Self::Price),
            "recent" => Ok(Self::Recent),
            other => Err(Error::InvalidInput(format!(
                "unknown sort key '{other}' (expected votes, price, or recent)"
            ))),
        }
    }
}

/// Produce the display ordering for `listings` under `key`.
///
/// The sort is stable, so listings with equal keys keep their input order
/// and re-renders do not jitter. `Votes` orders by the seed count
/// (`initial_votes`); live tallies are session state the store never sees.
#[must_use]
pub fn project(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut ordered = listings.to_vec();
    match key {
        SortKey::Votes => ordered.sort_by(|a, b| b.initial_votes.cmp(&a.initial_votes)),
        SortKey::Price => ordered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::Recent => {
            ordered.sort_by(|a, b| b.id.recency_rank().cmp(&a.id.recency_rank()));
        }
    }
    ordered
}
