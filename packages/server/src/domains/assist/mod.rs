pub mod service;
pub mod types;

pub use service::AssistService;
pub use types::{AssistOutcome, PriceSuggestion};
