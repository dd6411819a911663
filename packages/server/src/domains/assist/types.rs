//! Outcome types for the AI assist operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of an assist call.
///
/// Assist failures are recovered locally with fixed fallback values, so the
/// caller always gets something usable - but "the model answered" stays
/// distinguishable from "we degraded" for the client and for telemetry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AssistOutcome<T> {
    Generated { value: T },
    Fallback { value: T, reason: String },
}

impl<T> AssistOutcome<T> {
    pub fn generated(value: T) -> Self {
        Self::Generated { value }
    }

    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Self::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Generated { value } => value,
            Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Generated { value } => value,
            Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Structured price suggestion from the model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PriceSuggestion {
    pub suggested_price: f64,
    pub reasoning: String,
}
