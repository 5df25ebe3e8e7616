//! Listing submission payload and boundary validation

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::listing::{DealType, Listing, ListingId, PLACEHOLDER_IMAGE_URL};

/// Raw form input for a new listing, exactly as an input surface captures it:
/// every field an optional string. Validation and numeric parsing happen in
/// [`ListingSubmission::into_listing`], so malformed input is rejected at the
/// boundary instead of leaking a loosely-typed record into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSubmission {
    pub title: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub square_footage: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl ListingSubmission {
    /// Validate this submission and build the listing it describes.
    ///
    /// `title`, `price`, and `location` must be present and non-empty, and
    /// `price` must parse as a non-negative integer; otherwise
    /// [`Error::Validation`] names every offending field and nothing is
    /// built. Optional numeric fields coerce missing or non-numeric input to
    /// 0 (permissive-default policy, matching the submission form).
    ///
    /// New submissions always start at one vote (the submitter's) and are
    /// classified as warm deals.
    pub fn into_listing(self, id: ListingId) -> Result<Listing> {
        let mut missing = Vec::new();

        let title = normalize(self.title);
        if title.is_none() {
            missing.push("title".to_string());
        }

        let price = normalize(self.price).and_then(|raw| raw.parse::<u64>().ok());
        if price.is_none() {
            missing.push("price".to_string());
        }

        let location = normalize(self.location);
        if location.is_none() {
            missing.push("location".to_string());
        }

        let (Some(title), Some(price), Some(location)) = (title, price, location) else {
            return Err(Error::Validation(missing));
        };

        Ok(Listing {
            id,
            title,
            price,
            location,
            bedrooms: coerce_count(self.bedrooms),
            bathrooms: coerce_count(self.bathrooms),
            square_footage: coerce_count(self.square_footage),
            image_url: normalize(self.image_url)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            description: self.description.unwrap_or_default(),
            initial_votes: 1,
            deal_type: DealType::Warm,
        })
    }
}

/// Trim a field and treat whitespace-only input as absent.
fn normalize(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Coerce an optional numeric field to 0 when missing or non-numeric.
fn coerce_count(value: Option<String>) -> u32 {
    value
        .as_deref()
        .map(str::trim)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_submission() -> ListingSubmission {
        ListingSubmission {
            title: Some("3-bed family home".to_string()),
            price: Some("100000".to_string()),
            location: Some("Manchester, UK".to_string()),
            ..ListingSubmission::default()
        }
    }

    #[test]
    fn valid_submission_builds_listing() {
        let listing = valid_submission()
            .into_listing(ListingId::from("4"))
            .unwrap();

        assert_eq!(listing.title, "3-bed family home");
        assert_eq!(listing.price, 100_000);
        assert_eq!(listing.location, "Manchester, UK");
        assert_eq!(listing.initial_votes, 1);
        assert_eq!(listing.deal_type, DealType::Warm);
    }

    #[test]
    fn omitted_numeric_fields_default_to_zero() {
        let listing = valid_submission()
            .into_listing(ListingId::from("4"))
            .unwrap();

        assert_eq!(listing.bedrooms, 0);
        assert_eq!(listing.bathrooms, 0);
        assert_eq!(listing.square_footage, 0);
    }

    #[test]
    fn non_numeric_optional_fields_coerce_to_zero() {
        let submission = ListingSubmission {
            bedrooms: Some("three".to_string()),
            bathrooms: Some("".to_string()),
            square_footage: Some("1450".to_string()),
            ..valid_submission()
        };
        let listing = submission.into_listing(ListingId::from("4")).unwrap();

        assert_eq!(listing.bedrooms, 0);
        assert_eq!(listing.bathrooms, 0);
        assert_eq!(listing.square_footage, 1450);
    }

    #[test]
    fn absent_image_url_gets_placeholder() {
        let listing = valid_submission()
            .into_listing(ListingId::from("4"))
            .unwrap();
        assert_eq!(listing.image_url, PLACEHOLDER_IMAGE_URL);

        let submission = ListingSubmission {
            image_url: Some("https://example.com/house.jpg".to_string()),
            ..valid_submission()
        };
        let listing = submission.into_listing(ListingId::from("4")).unwrap();
        assert_eq!(listing.image_url, "https://example.com/house.jpg");
    }

    #[test]
    fn missing_required_fields_are_all_named() {
        let submission = ListingSubmission {
            title: Some("".to_string()),
            price: None,
            location: Some("   ".to_string()),
            ..ListingSubmission::default()
        };

        let error = submission.into_listing(ListingId::from("4")).unwrap_err();
        assert_eq!(
            error,
            Error::Validation(vec![
                "title".to_string(),
                "price".to_string(),
                "location".to_string()
            ])
        );
    }

    #[test]
    fn malformed_price_is_rejected() {
        let submission = ListingSubmission {
            price: Some("lots".to_string()),
            ..valid_submission()
        };
        let error = submission.into_listing(ListingId::from("4")).unwrap_err();
        assert_eq!(error, Error::Validation(vec!["price".to_string()]));
    }

    #[test]
    fn negative_price_is_rejected() {
        let submission = ListingSubmission {
            price: Some("-5".to_string()),
            ..valid_submission()
        };
        let error = submission.into_listing(ListingId::from("4")).unwrap_err();
        assert_eq!(error, Error::Validation(vec!["price".to_string()]));
    }

    #[test]
    fn description_defaults_to_empty() {
        let listing = valid_submission()
            .into_listing(ListingId::from("4"))
            .unwrap();
        assert_eq!(listing.description, "");
    }
}
