pub mod assist;
pub mod auth;
pub mod health;
pub mod images;
pub mod listings;

pub use assist::{assist_description_handler, assist_price_handler};
pub use auth::{login_handler, logout_handler, signup_handler};
pub use health::health_handler;
pub use images::upload_image_handler;
pub use listings::{list_listings_handler, listing_detail_handler, submit_listing_handler};

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Uniform error body for non-2xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
