//! Catalog filtering.

use std::str::FromStr;

use super::models::{Category, Listing};

/// Category selector for queries.
///
/// `All` is a query-only pseudo-category; it is never stored on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

/// Derive the filtered view of the catalog.
///
/// A listing passes when its category matches the selector (or the selector
/// is `All`) and the query is a case-insensitive substring of its name or
/// description. The empty query is a substring of everything. Single pass;
/// input order (newest first) is preserved. No ranking, no pagination.
pub fn filter_listings(
    listings: &[Listing],
    query: &str,
    category: CategoryFilter,
) -> Vec<Listing> {
    let needle = query.to_lowercase();

    listings
        .iter()
        .filter(|listing| {
            let matches_category = match category {
                CategoryFilter::All => true,
                CategoryFilter::Only(c) => listing.category == c,
            };
            let matches_query = listing.name.to_lowercase().contains(&needle)
                || listing.description.to_lowercase().contains(&needle);
            matches_category && matches_query
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ListingId;
    use crate::domains::catalog::models::Condition;
    use chrono::Utc;

    fn listing(name: &str, description: &str, category: Category) -> Listing {
        Listing {
            id: ListingId::new(),
            name: name.to_string(),
            price: 50.0,
            category,
            condition: Condition::UsedGood,
            description: description.to_string(),
            image: "https://example.com/img.png".to_string(),
            seller: "Tester".to_string(),
            posted_date: Utc::now(),
            whatsapp: None,
            linkedin: None,
        }
    }

    #[test]
    fn empty_query_and_all_is_identity() {
        let catalog = vec![
            listing("Arduino Uno", "intro board", Category::Microcontrollers),
            listing("HC-SR04", "distance sensor", Category::Sensors),
        ];

        assert_eq!(
            filter_listings(&catalog, "", CategoryFilter::All),
            catalog
        );
    }

    #[test]
    fn category_filter_keeps_only_matches() {
        let catalog = vec![
            listing("A", "a sensor thing", Category::Sensors),
            listing("B", "a tool thing", Category::Tools),
        ];

        let result = filter_listings(&catalog, "", CategoryFilter::Only(Category::Tools));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B");
    }

    #[test]
    fn query_matches_name_or_description_case_insensitively() {
        let catalog = vec![
            listing("ESP32 Board", "WiFi enabled", Category::Microcontrollers),
            listing("Jumper Wires", "silicone insulation, esp32 compatible", Category::Components),
            listing("Soldering Iron", "adjustable temperature", Category::Tools),
        ];

        let result = filter_listings(&catalog, "ESP32", CategoryFilter::All);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "ESP32 Board");
        assert_eq!(result[1].name, "Jumper Wires");
    }

    #[test]
    fn query_and_category_combine_with_and() {
        let catalog = vec![
            listing("ESP32 Board", "WiFi enabled", Category::Microcontrollers),
            listing("Jumper Wires", "esp32 compatible", Category::Components),
        ];

        let result = filter_listings(
            &catalog,
            "esp32",
            CategoryFilter::Only(Category::Components),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Jumper Wires");
    }

    #[test]
    fn no_match_yields_empty() {
        let catalog = vec![listing("Arduino", "board", Category::Microcontrollers)];
        assert!(filter_listings(&catalog, "raspberry", CategoryFilter::All).is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let catalog = vec![
            listing("one sensor", "x", Category::Sensors),
            listing("two sensor", "x", Category::Sensors),
            listing("three sensor", "x", Category::Sensors),
        ];

        let result = filter_listings(&catalog, "sensor", CategoryFilter::All);
        let names: Vec<_> = result.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["one sensor", "two sensor", "three sensor"]);
    }

    #[test]
    fn filter_parses_all_and_categories() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Kits".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Kits)
        );
        assert!("Everything".parse::<CategoryFilter>().is_err());
    }
}
