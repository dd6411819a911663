//! AI assist routes.
//!
//! Always 200: assist degradation is data for the form, not an HTTP error.

use axum::extract::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domains::assist::{AssistOutcome, PriceSuggestion};
use crate::domains::catalog::Condition;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub name: String,
    pub condition: Condition,
    #[serde(default)]
    pub features: String,
}

#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    pub name: String,
    pub condition: Condition,
}

pub async fn assist_description_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<DescriptionRequest>,
) -> Json<AssistOutcome<String>> {
    let outcome = state
        .assist
        .generate_description(
            &request.name,
            &request.condition.to_string(),
            &request.features,
        )
        .await;
    Json(outcome)
}

pub async fn assist_price_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<PriceRequest>,
) -> Json<AssistOutcome<PriceSuggestion>> {
    let outcome = state
        .assist
        .suggest_price(&request.name, &request.condition.to_string())
        .await;
    Json(outcome)
}
