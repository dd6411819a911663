//! API types for the catalog routes.

use serde::{Deserialize, Serialize};

use super::contact::ContactLinks;
use super::models::{Category, Condition, Listing};

/// Input for the listing submission workflow.
///
/// `price` arrives as the raw form text and is parsed/validated by the
/// workflow. Empty contact strings are treated as "not provided".
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitListingInput {
    pub name: String,
    pub price: String,
    pub category: Category,
    pub condition: Condition,
    pub description: String,
    /// Uploaded image data URL; a placeholder keyed by the name is derived
    /// when absent
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Detail view of a listing plus its derived contact affordances.
#[derive(Debug, Serialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: Listing,
    /// `null` when the seller provided no contact channel
    pub contact: Option<ContactLinks>,
}

impl ListingDetail {
    pub fn from_listing(listing: Listing) -> Self {
        let links = ContactLinks::for_listing(&listing);
        Self {
            listing,
            contact: links.has_any().then_some(links),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ListingId;
    use chrono::Utc;

    fn listing(whatsapp: Option<&str>) -> Listing {
        Listing {
            id: ListingId::new(),
            name: "ESP32".to_string(),
            price: 650.0,
            category: Category::Microcontrollers,
            condition: Condition::LikeNew,
            description: "WiFi + Bluetooth".to_string(),
            image: "https://example.com/img.png".to_string(),
            seller: "Jason K.".to_string(),
            posted_date: Utc::now(),
            whatsapp: whatsapp.map(String::from),
            linkedin: None,
        }
    }

    #[test]
    fn detail_carries_contact_links() {
        let detail = ListingDetail::from_listing(listing(Some("+919876543213")));
        let contact = detail.contact.expect("contact links");
        assert_eq!(
            contact.whatsapp.as_deref(),
            Some("https://wa.me/919876543213")
        );
    }

    #[test]
    fn detail_without_channels_serializes_explicit_null() {
        let detail = ListingDetail::from_listing(listing(None));
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json.get("contact"), Some(&serde_json::Value::Null));
    }
}
