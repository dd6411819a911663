use std::sync::Arc;

use axum::{middleware::Next, response::Response};
use tracing::debug;

use crate::common::Identity;
use crate::domains::identity::JwtService;

/// Session token middleware
///
/// Resolves the request's [`Identity`] from the Authorization header and adds
/// it to the request extensions. This middleware does NOT block requests -
/// a missing or invalid token resolves to `Identity::Unauthenticated` and
/// the gate lives in the handlers that need one.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let identity = extract_identity(&request, &jwt_service);

    if let Some(name) = identity.display_name() {
        debug!("Authenticated visitor: {}", name);
    } else {
        debug!("No valid session token");
    }
    request.extensions_mut().insert(identity);

    next.run(request).await
}

/// Extract and verify the session token from a request
fn extract_identity(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Identity {
    let Some(auth_header) = request.headers().get("authorization") else {
        return Identity::Unauthenticated;
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Identity::Unauthenticated;
    };

    // Accept both "Bearer <token>" and a raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    match jwt_service.verify_token(token) {
        Ok(claims) => Identity::authenticated(claims.display_name, claims.email),
        Err(_) => Identity::Unauthenticated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_header(value: Option<String>) -> axum::http::Request<axum::body::Body> {
        let builder = axum::http::Request::builder();
        let builder = match value {
            Some(v) => builder.header("authorization", v),
            None => builder,
        };
        builder.body(axum::body::Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = JwtService::new("test_secret", "test_issuer".to_string());
        let token = jwt_service
            .create_token("Alex J.", "alex@university.edu")
            .unwrap();

        let request = request_with_header(Some(format!("Bearer {}", token)));
        let identity = extract_identity(&request, &jwt_service);
        assert_eq!(identity.display_name(), Some("Alex J."));
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = JwtService::new("test_secret", "test_issuer".to_string());
        let token = jwt_service
            .create_token("Alex J.", "alex@university.edu")
            .unwrap();

        let request = request_with_header(Some(token));
        let identity = extract_identity(&request, &jwt_service);
        assert!(identity.is_authenticated());
    }

    #[test]
    fn test_no_auth_header() {
        let jwt_service = JwtService::new("test_secret", "test_issuer".to_string());
        let request = request_with_header(None);
        assert_eq!(
            extract_identity(&request, &jwt_service),
            Identity::Unauthenticated
        );
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = JwtService::new("test_secret", "test_issuer".to_string());
        let request = request_with_header(Some("Bearer invalid_token".to_string()));
        assert_eq!(
            extract_identity(&request, &jwt_service),
            Identity::Unauthenticated
        );
    }
}
