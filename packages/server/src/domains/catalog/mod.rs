pub mod contact;
pub mod data;
pub mod models;
pub mod query;
pub mod seed;
pub mod store;
pub mod submit;

// Re-export models (domain models)
pub use models::listing::{Category, Condition, Listing};

// Re-export data types (API types)
pub use data::{ListingDetail, SubmitListingInput};

// Re-export operations
pub use contact::ContactLinks;
pub use query::{filter_listings, CategoryFilter};
pub use store::CatalogStore;
pub use submit::{submit_listing, SubmitError};
