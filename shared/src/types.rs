//! Wire envelopes shared by the browser client and the relay

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Body accepted by `POST /api/generate`
///
/// A `prompt` that is absent, `null` or not a string deserializes as `None`,
/// so the relay can answer every such body with the same 400 envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }

    /// The prompt, if present and non-empty
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Envelope returned by `POST /api/generate`
///
/// Exactly one of `result` or `error` is present on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Success { result: String },
    Failure { error: String },
}

impl GenerationResult {
    pub fn success(result: impl Into<String>) -> Self {
        Self::Success { result: result.into() }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { error: error.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Body accepted by `POST /api/compose`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    #[serde(default)]
    pub selections: BTreeMap<String, String>,
    #[serde(default)]
    pub additional_details: String,
}

/// Body returned by `POST /api/compose`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComposeResponse {
    pub prompt: String,
}

/// Body returned by `GET /health`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub provider: String,
    pub model: String,
    pub api_key_configured: bool,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_request_accepts_string_prompt() {
        let request: GenerateRequest = serde_json::from_value(json!({ "prompt": "a heist" })).unwrap();
        assert_eq!(request.prompt(), Some("a heist"));
    }

    #[test]
    fn test_generate_request_treats_missing_and_wrong_types_as_absent() {
        for body in [json!({}), json!({ "prompt": null }), json!({ "prompt": 42 }), json!({ "prompt": "" })] {
            let request: GenerateRequest = serde_json::from_value(body.clone()).unwrap();
            assert_eq!(request.prompt(), None, "body {body} should have no prompt");
        }
    }

    #[test]
    fn test_generation_result_wire_shape() {
        let ok = serde_json::to_value(GenerationResult::success("Hello")).unwrap();
        assert_eq!(ok, json!({ "result": "Hello" }));

        let err = serde_json::to_value(GenerationResult::failure("rate limited")).unwrap();
        assert_eq!(err, json!({ "error": "rate limited" }));

        let parsed: GenerationResult = serde_json::from_value(json!({ "error": "boom" })).unwrap();
        assert!(!parsed.is_success());
    }

    #[test]
    fn test_compose_request_uses_camel_case_details() {
        let request: ComposeRequest = serde_json::from_value(json!({
            "selections": { "genre": "Noir" },
            "additionalDetails": "set on a ferry"
        }))
        .unwrap();

        assert_eq!(request.selections.get("genre").map(String::as_str), Some("Noir"));
        assert_eq!(request.additional_details, "set on a ferry");
    }
}
