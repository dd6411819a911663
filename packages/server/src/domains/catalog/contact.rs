//! Seller contact affordances for the listing detail view.

use serde::Serialize;

use super::models::Listing;

/// Deep links derived from a listing's contact fields.
///
/// Links are derived, never fabricated: a missing channel stays `None`, and
/// a listing with no channel at all is surfaced as an explicit no-contact
/// state rather than a placeholder.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ContactLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl ContactLinks {
    /// Derive the contact affordances for a listing.
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            whatsapp: listing.whatsapp.as_deref().and_then(whatsapp_link),
            linkedin: listing.linkedin.as_deref().map(linkedin_url),
        }
    }

    /// Whether the seller provided any contact channel.
    pub fn has_any(&self) -> bool {
        self.whatsapp.is_some() || self.linkedin.is_some()
    }
}

/// WhatsApp deep link from the digits-only form of the number.
///
/// A number with no digits at all counts as absent.
fn whatsapp_link(number: &str) -> Option<String> {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("https://wa.me/{}", digits))
    }
}

/// Profile URL: full URLs pass through, bare handles get the profile base.
fn linkedin_url(handle: &str) -> String {
    if handle.starts_with("http") {
        handle.to_string()
    } else {
        format!("https://linkedin.com/in/{}", handle)
    }
}
