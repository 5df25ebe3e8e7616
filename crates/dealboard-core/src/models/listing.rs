//! Listing model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image used when a submission does not supply one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=800&q=80";

/// A unique identifier for a listing.
///
/// Generated ids are the Unix-millisecond creation timestamp rendered as a
/// string, so newer listings always carry numerically larger ids. Seed data
/// and other callers may supply arbitrary strings; those sort with rank 0
/// under the `recent` ordering (see [`ListingId::recency_rank`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(String);

impl ListingId {
    /// Create an ID from a Unix-millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Get the string form of this ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric rank used by the `recent` sort ordering.
    ///
    /// Non-numeric ids (externally supplied data) rank as 0 and keep their
    /// relative input order under the stable sort.
    #[must_use]
    pub fn recency_rank(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ListingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Editorial classification of a deal. Assigned at creation time and never
/// recomputed from votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    Hot,
    Warm,
    Cold,
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        };
        write!(f, "{label}")
    }
}

/// A property deal on the board.
///
/// Listings are immutable once created. Live vote tallies live in the
/// session's [`VoteBoard`](crate::vote::VoteBoard), never here;
/// `initial_votes` is only the seed value the tally starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier, unique for the lifetime of the session
    pub id: ListingId,
    /// Headline, non-empty
    pub title: String,
    /// Asking price in whole pounds
    pub price: u64,
    /// Human-readable location, non-empty
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    /// Photo URL, defaulted to [`PLACEHOLDER_IMAGE_URL`] when absent
    pub image_url: String,
    pub description: String,
    /// Seed value for the vote tally
    pub initial_votes: i64,
    pub deal_type: DealType,
}
