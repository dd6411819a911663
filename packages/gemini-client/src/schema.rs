//! Type-safe schema generation for Gemini structured outputs.
//!
//! Uses the `schemars` crate to generate JSON schemas from Rust types, then
//! rewrites them into the OpenAPI-style subset the `responseSchema` field
//! accepts.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use gemini_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct PriceEstimate {
//!     suggested_price: f64,
//!     reasoning: String,
//! }
//!
//! let schema = PriceEstimate::response_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be used as Gemini structured output.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a Gemini-compatible response schema for this type.
    ///
    /// The Gemini `responseSchema` field accepts an OpenAPI 3.0 schema
    /// subset: no `$ref`/`definitions`, no `additionalProperties`, no
    /// `$schema` marker. This method inlines references and strips the
    /// unsupported keys from the schemars output.
    fn response_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        // Step 1: Inline all $ref references (responseSchema has no definitions)
        inline_refs(&mut value);

        // Step 2: Strip keys the API rejects
        strip_unsupported_keys(&mut value);

        // Step 3: Remove the definitions section and $schema marker
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Remove schema keys the `responseSchema` validator rejects.
fn strip_unsupported_keys(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.remove("additionalProperties");
            map.remove("title");
            for (_, v) in map.iter_mut() {
                strip_unsupported_keys(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                strip_unsupported_keys(item);
            }
        }
        _ => {}
    }
}

/// Inline all $ref references by replacing them with the actual schema from definitions.
fn inline_refs(value: &mut serde_json::Value) {
    let definitions = if let serde_json::Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

/// Recursively inline $ref references.
fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                // Parse ref like "#/definitions/PriceEstimate"
                if ref_path.starts_with("#/definitions/") {
                    let type_name = ref_path.trim_start_matches("#/definitions/");
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        // Inline any nested refs in the inlined schema
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct Estimate {
        suggested_price: f64,
        reasoning: Option<String>,
    }

    #[derive(Deserialize, JsonSchema)]
    struct Wrapper {
        estimates: Vec<Estimate>,
    }

    #[test]
    fn schema_is_object_without_marker() {
        let schema = Estimate::response_schema();
        let obj = schema.as_object().unwrap();

        assert_eq!(
            obj.get("type"),
            Some(&serde_json::Value::String("object".to_string()))
        );
        assert!(!obj.contains_key("$schema"));
        assert!(!obj.contains_key("additionalProperties"));
    }

    #[test]
    fn schema_has_properties() {
        let schema = Estimate::response_schema();
        let props = schema
            .get("properties")
            .and_then(|p| p.as_object())
            .unwrap();

        assert!(props.contains_key("suggested_price"));
        assert!(props.contains_key("reasoning"));
    }

    #[test]
    fn nested_refs_are_inlined() {
        let schema = Wrapper::response_schema();
        let schema_str = serde_json::to_string(&schema).unwrap();

        assert!(
            !schema_str.contains("$ref"),
            "nested schemas should be inlined, got: {}",
            schema_str
        );
        assert!(!schema.as_object().unwrap().contains_key("definitions"));

        // The items schema of the array should be the inlined Estimate object
        let items = schema
            .pointer("/properties/estimates/items")
            .and_then(|v| v.as_object())
            .unwrap();
        assert!(items.contains_key("properties"));
    }
}
