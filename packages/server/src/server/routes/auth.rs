//! Mock authentication routes.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::Identity;
use crate::domains::identity::{login, signup, CredentialError};
use crate::server::app::AppState;

use super::{error_response, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub university: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub display_name: String,
    pub email: String,
}

pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let identity = login(&request.email, &request.password).map_err(credential_error)?;
    session_response(&state, identity)
}

pub async fn signup_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let identity = signup(
        &request.name,
        &request.email,
        &request.password,
        &request.university,
    )
    .map_err(credential_error)?;
    session_response(&state, identity)
}

/// Logout is client-side token discard; the endpoint exists for symmetry.
pub async fn logout_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn session_response(
    state: &AppState,
    identity: Identity,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Identity::Authenticated {
        display_name,
        email,
    } = identity
    else {
        // login/signup only ever hand back authenticated identities
        return Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "session creation failed",
        ));
    };

    let token = state
        .jwt_service
        .create_token(&display_name, &email)
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(SessionResponse {
        token,
        user: SessionUser {
            display_name,
            email,
        },
    }))
}

fn credential_error(e: CredentialError) -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
}
