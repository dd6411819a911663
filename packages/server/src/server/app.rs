//! Application setup and router assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{middleware, Extension, Router};
use gemini_client::GeminiClient;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::Config;
use crate::domains::assist::AssistService;
use crate::domains::catalog::CatalogStore;
use crate::domains::identity::JwtService;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    assist_description_handler, assist_price_handler, health_handler, list_listings_handler,
    listing_detail_handler, login_handler, logout_handler, signup_handler,
    submit_listing_handler, upload_image_handler,
};

/// Shared application state
///
/// Constructed once at startup and handed to every handler. The in-memory
/// catalog lives here for the lifetime of the process and is torn down with
/// it; nothing is persisted.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub assist: Arc<AssistService>,
    pub jwt_service: Arc<JwtService>,
}

/// Request bodies may carry the base64 form of a 5 MB image.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Build the Axum application router with a seeded catalog.
pub fn build_app(config: &Config) -> Router {
    build_app_with_catalog(config, Arc::new(CatalogStore::seeded()))
}

/// Build the router against a specific catalog (tests pass their own).
pub fn build_app_with_catalog(config: &Config, catalog: Arc<CatalogStore>) -> Router {
    if config.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY not set - assist endpoints will serve fallbacks");
    }

    let assist = Arc::new(AssistService::new(
        GeminiClient::new(config.gemini_api_key.clone()),
        config.gemini_model.clone(),
        Duration::from_secs(config.assist_timeout_secs),
    ));
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
    ));

    let state = AppState {
        catalog,
        assist,
        jwt_service: jwt_service.clone(),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/listings",
            get(list_listings_handler).post(submit_listing_handler),
        )
        .route("/api/listings/:id", get(listing_detail_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/signup", post(signup_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/assist/description", post(assist_description_handler))
        .route("/api/assist/price", post(assist_price_handler))
        .route("/api/images", post(upload_image_handler))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(state))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Permissive in development (no origins configured), restricted otherwise.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
