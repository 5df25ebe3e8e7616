//! Data models for Dealboard

mod listing;
mod submission;

pub use listing::{DealType, Listing, ListingId, PLACEHOLDER_IMAGE_URL};
pub use submission::ListingSubmission;
