//! Catalog routes: browse, detail, submit.

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::common::{Identity, ListingId};
use crate::domains::catalog::{
    filter_listings, submit_listing, CategoryFilter, Listing, ListingDetail, SubmitListingInput,
};
use crate::server::app::AppState;

use super::{error_response, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct ListingsQuery {
    #[serde(default)]
    pub query: String,
    /// "All", absent, or one of the listing categories
    pub category: Option<String>,
}

/// Filtered catalog view, newest first.
pub async fn list_listings_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListingsQuery>,
) -> Result<Json<Vec<Listing>>, (StatusCode, Json<ErrorResponse>)> {
    let category = match params.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw
            .parse()
            .map_err(|e: anyhow::Error| error_response(StatusCode::BAD_REQUEST, e.to_string()))?,
    };

    let listings = filter_listings(&state.catalog.all(), &params.query, category);
    Ok(Json(listings))
}

/// Listing detail with derived contact affordances.
pub async fn listing_detail_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<ListingId>,
) -> Result<Json<ListingDetail>, (StatusCode, Json<ErrorResponse>)> {
    state
        .catalog
        .get(id)
        .map(|listing| Json(ListingDetail::from_listing(listing)))
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Listing not found"))
}

/// Submission endpoint.
///
/// Identity is hard-required: an unauthenticated request is turned away here
/// so the workflow never has to invent a seller name.
pub async fn submit_listing_handler(
    Extension(state): Extension<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<SubmitListingInput>,
) -> Result<(StatusCode, Json<Listing>), (StatusCode, Json<ErrorResponse>)> {
    let Some(seller) = identity.display_name() else {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Sign in to post a listing",
        ));
    };

    match submit_listing(&state.catalog, input, seller) {
        Ok(listing) => Ok((StatusCode::CREATED, Json(listing))),
        Err(e) => Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
    }
}
