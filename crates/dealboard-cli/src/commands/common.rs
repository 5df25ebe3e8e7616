//! Shared rendering helpers for board output.

use dealboard_core::{DealType, Listing, Session, VoteDirection, VoteState};
use serde::Serialize;

/// One listing as rendered for `--json` output: the stored record plus the
/// session's live tally.
#[derive(Debug, Serialize)]
pub struct ListingItem {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    pub image_url: String,
    pub description: String,
    pub deal_type: DealType,
    pub votes: i64,
    pub user_vote: Option<VoteDirection>,
}

pub fn listing_to_item(listing: &Listing, tally: VoteState) -> ListingItem {
    ListingItem {
        id: listing.id.to_string(),
        title: listing.title.clone(),
        price: listing.price,
        location: listing.location.clone(),
        bedrooms: listing.bedrooms,
        bathrooms: listing.bathrooms,
        square_footage: listing.square_footage,
        image_url: listing.image_url.clone(),
        description: listing.description.clone(),
        deal_type: listing.deal_type,
        votes: tally.votes,
        user_vote: tally.user_vote,
    }
}

/// The session's current view as JSON items, in display order.
pub fn board_items(session: &Session) -> Vec<ListingItem> {
    session
        .view()
        .iter()
        .map(|listing| listing_to_item(listing, session.tally_for(listing)))
        .collect()
}

/// The session's current view as display lines, one listing per line.
pub fn format_board_lines(session: &Session) -> Vec<String> {
    session
        .view()
        .iter()
        .map(|listing| {
            let tally = session.tally_for(listing);
            let id = listing.id.to_string();
            let short_id = id.chars().take(13).collect::<String>();
            format!(
                "{short_id:<13}  {:>5}{} {:<12}  {:>9}  {} ({})  {} bd / {} ba / {} sqft",
                tally.votes,
                vote_marker(tally.user_vote),
                deal_badge(listing.deal_type),
                format_price(listing.price),
                listing.title,
                listing.location,
                listing.bedrooms,
                listing.bathrooms,
                group_thousands(u64::from(listing.square_footage)),
            )
        })
        .collect()
}

/// Badge text shown next to each card.
pub fn deal_badge(deal_type: DealType) -> &'static str {
    match deal_type {
        DealType::Hot => "🔥 Hot Deal",
        DealType::Warm => "👍 Good Deal",
        DealType::Cold => "❄️ Cold Deal",
    }
}

/// Marker for the viewer's current vote on a card.
pub fn vote_marker(user_vote: Option<VoteDirection>) -> &'static str {
    match user_vote {
        Some(VoteDirection::Up) => "▲",
        Some(VoteDirection::Down) => "▼",
        None => " ",
    }
}

/// Render a price in pounds with thousands separators, e.g. `£285,000`.
pub fn format_price(price: u64) -> String {
    format!("£{}", group_thousands(price))
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
