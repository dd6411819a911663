use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ListingId;

/// Listing - one sellable item in the campus marketplace
///
/// Listings are created once and never mutated or deleted; the catalog only
/// grows at the front.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    /// Currency-agnostic, non-negative
    pub price: f64,
    pub category: Category,
    pub condition: Condition,
    pub description: String,
    /// Image URL or embedded `data:` URI, resolvable at render time
    pub image: String,
    /// Seller display name; no identity record stands behind it
    pub seller: String,
    pub posted_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

// =============================================================================
// Enums - closed sets, fixed wire spelling
// =============================================================================

/// Listing category. `All` is a query-side selector, never stored here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Microcontrollers,
    Sensors,
    Components,
    Tools,
    Kits,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Microcontrollers => write!(f, "Microcontrollers"),
            Category::Sensors => write!(f, "Sensors"),
            Category::Components => write!(f, "Components"),
            Category::Tools => write!(f, "Tools"),
            Category::Kits => write!(f, "Kits"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Microcontrollers" => Ok(Category::Microcontrollers),
            "Sensors" => Ok(Category::Sensors),
            "Components" => Ok(Category::Components),
            "Tools" => Ok(Category::Tools),
            "Kits" => Ok(Category::Kits),
            _ => Err(anyhow::anyhow!("Invalid category: {}", s)),
        }
    }
}

/// Item condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    #[serde(rename = "Used - Good")]
    UsedGood,
    #[serde(rename = "Used - Fair")]
    UsedFair,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::New => write!(f, "New"),
            Condition::LikeNew => write!(f, "Like New"),
            Condition::UsedGood => write!(f, "Used - Good"),
            Condition::UsedFair => write!(f, "Used - Fair"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "New" => Ok(Condition::New),
            "Like New" => Ok(Condition::LikeNew),
            "Used - Good" => Ok(Condition::UsedGood),
            "Used - Fair" => Ok(Condition::UsedFair),
            _ => Err(anyhow::anyhow!("Invalid condition: {}", s)),
        }
    }
}
