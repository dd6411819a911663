pub mod app;
pub mod middleware;
pub mod routes;

pub use app::{build_app, build_app_with_catalog, AppState};
