//! Pure Google Gemini REST API client
//!
//! A clean, minimal client for the Generative Language API with no
//! domain-specific logic. Supports plain text generation and schema-constrained
//! JSON generation.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! // Text generation
//! let response = client
//!     .generate_content(
//!         GenerateRequest::new("gemini-3-flash-preview", "Say hello")
//!             .temperature(0.7)
//!             .max_output_tokens(150),
//!     )
//!     .await?;
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct PriceEstimate {
//!     suggested_price: f64,
//!     reasoning: String,
//! }
//!
//! // Schema generated automatically from the type
//! let estimate: PriceEstimate = client
//!     .generate_structured("gemini-3-flash-preview", prompt)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{GeminiError, Result};
pub use schema::StructuredOutput;
pub use types::{GenerateRequest, GenerateResponse, UsageMetadata};

use reqwest::Client;
use tracing::{debug, warn};

use types::{Content, GenerateContentBody, GenerateContentRaw, GenerationConfig};

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Text generation.
    ///
    /// Sends the prompt to `models/{model}:generateContent` and returns the
    /// first candidate's text.
    pub async fn generate_content(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let body = GenerateContentBody {
            contents: vec![Content::user(request.prompt)],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
                ..Default::default()
            }),
        };

        let raw = self.post_generate(&request.model, &body).await?;
        let text = first_candidate_text(&raw)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini text generation"
        );

        Ok(GenerateResponse {
            text,
            usage: raw.usage_metadata,
        })
    }

    /// Type-safe structured output generation.
    ///
    /// Generates a response schema from the type `T` using `schemars`, asks
    /// the model for JSON conforming to it, and deserializes the reply.
    pub async fn generate_structured<T: StructuredOutput>(
        &self,
        model: &str,
        prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::response_schema();

        debug!(
            type_name = T::type_name(),
            schema = %serde_json::to_string(&schema).unwrap_or_default(),
            "Generated Gemini response schema"
        );

        let body = GenerateContentBody {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.0),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
                ..Default::default()
            }),
        };

        let raw = self.post_generate(model, &body).await?;
        let text = first_candidate_text(&raw)?;

        serde_json::from_str(&text)
            .map_err(|e| GeminiError::Parse(format!("Failed to deserialize response: {}", e)))
    }

    /// POST a generateContent body and parse the raw response envelope.
    async fn post_generate(
        &self,
        model: &str,
        body: &GenerateContentBody,
    ) -> Result<GenerateContentRaw> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, model = %model, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error: {}", error_text)));
        }

        response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))
    }
}

/// Extract the concatenated text of the first candidate.
fn first_candidate_text(raw: &GenerateContentRaw) -> Result<String> {
    let content = raw
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .ok_or_else(|| GeminiError::Api("No candidates in Gemini response".into()))?;

    let text: String = content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");

    Ok(text)
}
