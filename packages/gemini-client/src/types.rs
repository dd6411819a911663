//! Gemini API request and response types.
//!
//! Wire format follows the `models/{model}:generateContent` endpoint of the
//! Generative Language API. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

// =============================================================================
// Text Generation
// =============================================================================

/// Text generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Model to use (e.g., "gemini-3-flash-preview")
    pub model: String,

    /// The prompt text
    pub prompt: String,

    /// Sampling temperature (0.0 to 2.0)
    pub temperature: Option<f32>,

    /// Maximum tokens in the completion
    pub max_output_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Create a new generation request with the given model and prompt.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max output tokens.
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// Text generation response.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// The generated text (first candidate, parts concatenated)
    pub text: String,

    /// Token usage statistics
    pub usage: Option<UsageMetadata>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: u32,

    /// Tokens in the candidates
    #[serde(default)]
    pub candidates_token_count: u32,

    /// Total tokens used
    #[serde(default)]
    pub total_token_count: u32,
}

// =============================================================================
// Wire types (internal)
// =============================================================================

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentBody {
    pub contents: Vec<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text part within a content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default)]
    pub text: String,
}

/// Generation configuration.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// "application/json" for schema-constrained output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// Raw response from `generateContent` (for internal parsing).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRaw {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    /// Absent when the candidate was blocked before producing content
    pub content: Option<Content>,
}
