use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    listings: usize,
}

/// Health check endpoint
///
/// The catalog is in-memory, so liveness is the only meaningful check; the
/// listing count doubles as a smoke signal that seeding ran.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            listings: state.catalog.len(),
        }),
    )
}
