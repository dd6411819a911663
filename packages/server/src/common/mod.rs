// Common types and utilities shared across the application

pub mod id;
pub mod identity;

pub use id::{Id, ListingId};
pub use identity::Identity;
