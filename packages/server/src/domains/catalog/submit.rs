//! Listing submission workflow.
//!
//! Validates a draft, resolves the image, stamps the workflow-assigned fields
//! (id, posted date, seller) and prepends the result to the catalog. The
//! identity gate lives in the caller; this module only ever sees a resolved
//! seller name.

use chrono::Utc;
use thiserror::Error;

use crate::common::ListingId;

use super::data::SubmitListingInput;
use super::models::Listing;
use super::store::CatalogStore;

/// Field-level validation failures for a submitted draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("price must be a non-negative number")]
    InvalidPrice,
}

/// Run the submission workflow: validate, build, and insert.
///
/// Returns the stored listing so the caller can echo it back.
pub fn submit_listing(
    store: &CatalogStore,
    input: SubmitListingInput,
    seller: &str,
) -> Result<Listing, SubmitError> {
    let listing = build_listing(input, seller)?;
    store.add(listing.clone());
    Ok(listing)
}

/// Build a fully-populated listing from a draft.
///
/// Pure except for the id and timestamp stamps; exposed separately from
/// [`submit_listing`] for tests and reuse.
pub fn build_listing(input: SubmitListingInput, seller: &str) -> Result<Listing, SubmitError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(SubmitError::EmptyName);
    }

    let description = input.description.trim();
    if description.is_empty() {
        return Err(SubmitError::EmptyDescription);
    }

    let price = parse_price(&input.price)?;

    let image = normalize_optional(input.image)
        .unwrap_or_else(|| placeholder_image(name));

    Ok(Listing {
        id: ListingId::new(),
        name: name.to_string(),
        price,
        category: input.category,
        condition: input.condition,
        description: description.to_string(),
        image,
        seller: seller.to_string(),
        posted_date: Utc::now(),
        whatsapp: normalize_optional(input.whatsapp),
        linkedin: normalize_optional(input.linkedin),
    })
}

/// Parse the price form text. Malformed, non-finite, or negative input is a
/// validation error, never a stored value.
fn parse_price(text: &str) -> Result<f64, SubmitError> {
    let price: f64 = text.trim().parse().map_err(|_| SubmitError::InvalidPrice)?;
    if !price.is_finite() || price < 0.0 {
        return Err(SubmitError::InvalidPrice);
    }
    Ok(price)
}

/// Deterministic placeholder image keyed by the listing name.
fn placeholder_image(name: &str) -> String {
    format!(
        "https://picsum.photos/seed/{}/400/400",
        urlencoding::encode(name)
    )
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
