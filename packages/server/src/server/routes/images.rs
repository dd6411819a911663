//! Image acquisition: multipart upload to an embeddable data URL.
//!
//! Nothing is stored server-side; the client embeds the returned data URL in
//! its listing submission.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use super::{error_response, ErrorResponse};

/// Uploads are capped at 5 MB, matching the form's stated limit.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    /// `data:` URL ready to embed in a listing submission
    pub image: String,
}

pub async fn upload_image_handler(
    mut multipart: Multipart,
) -> Result<Json<ImageResponse>, (StatusCode, Json<ErrorResponse>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?
    {
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Only image uploads are accepted",
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Image exceeds the 5MB limit",
            ));
        }

        return Ok(Json(ImageResponse {
            image: format!("data:{};base64,{}", content_type, STANDARD.encode(&bytes)),
        }));
    }

    Err(error_response(
        StatusCode::BAD_REQUEST,
        "No image part in upload",
    ))
}
