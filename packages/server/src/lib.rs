// EduSwap Electronics - API Core
//
// This crate provides the backend API for the student electronics resale
// marketplace: the in-memory listing catalog, search/filter, the submission
// workflow, the mock identity scheme, and Gemini-assisted drafting.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
