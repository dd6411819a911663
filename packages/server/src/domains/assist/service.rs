//! Gemini-backed drafting for the submission form.
//!
//! Both operations are optional enrichments: any transport, API, timeout, or
//! parse failure degrades to a fixed fallback value at this boundary and is
//! never surfaced to the caller as an error.

use std::future::Future;
use std::time::Duration;

use gemini_client::{GeminiClient, GeminiError, GenerateRequest};
use tracing::warn;

use super::types::{AssistOutcome, PriceSuggestion};

/// Fallback description when generation fails.
pub const DESCRIPTION_FALLBACK: &str = "Error generating description. Please write manually.";

/// Shown when the model returns an empty completion.
pub const DESCRIPTION_EMPTY: &str = "No description generated.";

/// Fixed price suggestion when the model cannot be reached or parsed.
pub fn fallback_price_suggestion() -> PriceSuggestion {
    PriceSuggestion {
        suggested_price: 10.0,
        reasoning: "Default pricing due to error.".to_string(),
    }
}

/// Stateless client for the two assist operations.
///
/// No retry, no caching. Each call is one bounded round trip to Gemini.
#[derive(Clone)]
pub struct AssistService {
    client: GeminiClient,
    model: String,
    timeout: Duration,
}

impl AssistService {
    pub fn new(client: GeminiClient, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model: model.into(),
            timeout,
        }
    }

    /// Draft a short product description for the submission form.
    pub async fn generate_description(
        &self,
        name: &str,
        condition: &str,
        features: &str,
    ) -> AssistOutcome<String> {
        let request = GenerateRequest::new(&self.model, description_prompt(name, condition, features))
            .temperature(0.7)
            .max_output_tokens(150);

        match self.bounded(self.client.generate_content(request)).await {
            Ok(response) => {
                let text = response.text.trim().to_string();
                if text.is_empty() {
                    AssistOutcome::generated(DESCRIPTION_EMPTY.to_string())
                } else {
                    AssistOutcome::generated(text)
                }
            }
            Err(reason) => {
                warn!(%reason, item = %name, "description generation degraded to fallback");
                AssistOutcome::fallback(DESCRIPTION_FALLBACK.to_string(), reason)
            }
        }
    }

    /// Suggest a fair second-hand price for an item.
    pub async fn suggest_price(&self, name: &str, condition: &str) -> AssistOutcome<PriceSuggestion> {
        let prompt = price_prompt(name, condition);
        let call = self
            .client
            .generate_structured::<PriceSuggestion>(&self.model, prompt);

        match self.bounded(call).await {
            Ok(suggestion) => AssistOutcome::generated(suggestion),
            Err(reason) => {
                warn!(%reason, item = %name, "price suggestion degraded to fallback");
                AssistOutcome::fallback(fallback_price_suggestion(), reason)
            }
        }
    }

    /// Bound the suspended window; a timeout is just another fallback reason.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, GeminiError>>,
    ) -> Result<T, String> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!("timed out after {:?}", self.timeout)),
        }
    }
}

fn description_prompt(name: &str, condition: &str, features: &str) -> String {
    format!(
        "Create a compelling 3-sentence product description for a student marketplace.\n\
         Item: {}\n\
         Condition: {}\n\
         Details: {}\n\
         Tone: Student-friendly, technical but accessible.",
        name, condition, features
    )
}

fn price_prompt(name: &str, condition: &str) -> String {
    format!(
        "You are a pricing expert for hobbyist electronics.\n\
         Suggest a fair second-hand price in USD for: {} in {} condition.\n\
         Return your response in JSON format.",
        name, condition
    )
}
