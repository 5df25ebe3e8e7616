//! dealboard-core - Core library for Dealboard
//!
//! This crate contains the models, session state, and board logic shared by
//! every Dealboard presentation surface. All state is in-memory and scoped to
//! a single [`Session`]; nothing is persisted between sessions.

pub mod error;
pub mod models;
pub mod seed;
pub mod session;
pub mod sort;
pub mod store;
pub mod vote;

pub use error::{Error, Result};
pub use models::{DealType, Listing, ListingId, ListingSubmission};
pub use session::Session;
pub use sort::{project, SortKey};
pub use store::ListingStore;
pub use vote::{VoteBoard, VoteDirection, VoteState};
