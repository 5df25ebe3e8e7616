//! Seed data
//!
//! The three listings every fresh session starts from. Ids are small numeric
//! strings, so generated timestamp ids always outrank them under the
//! `recent` ordering.

use crate::models::{DealType, Listing, ListingId};

/// Listings used to initialize a seeded session, newest first.
#[must_use]
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId::from("1"),
            title: "Stunning Victorian Terrace with Modern Upgrades".to_string(),
            price: 285_000,
            location: "Leeds, West Yorkshire".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            square_footage: 1450,
            image_url:
                "https://images.unsplash.com/photo-1570129477492-45c003edd2be?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            description: "Beautifully renovated Victorian terrace in prime location. New kitchen, \
                          bathroom, and energy-efficient features. Perfect for families."
                .to_string(),
            initial_votes: 47,
            deal_type: DealType::Hot,
        },
        Listing {
            id: ListingId::from("2"),
            title: "Modern 2-Bed Apartment with City Views".to_string(),
            price: 195_000,
            location: "Birmingham City Centre".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            square_footage: 850,
            image_url:
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            description: "Contemporary apartment with floor-to-ceiling windows and private \
                          balcony. Excellent transport links and amenities nearby."
                .to_string(),
            initial_votes: 23,
            deal_type: DealType::Warm,
        },
        Listing {
            id: ListingId::from("3"),
            title: "Charming Cottage with Large Garden".to_string(),
            price: 320_000,
            location: "Cotswolds, Gloucestershire".to_string(),
            bedrooms: 4,
            bathrooms: 2,
            square_footage: 1850,
            image_url:
                "https://images.unsplash.com/photo-1449844908441-8829872d2607?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            description: "Picturesque stone cottage with original features and expansive gardens. \
                          Rural setting with good commuter links."
                .to_string(),
            initial_votes: 12,
            deal_type: DealType::Cold,
        },
    ]
}
