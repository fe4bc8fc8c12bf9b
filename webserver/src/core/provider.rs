//! Provider-specific request building and response parsing

use serde_json::{Value, json};

use crate::config::{ProviderConfig, ProviderKind};
use crate::system_prompt::SYSTEM_PROMPT;
use crate::types::UpstreamRequest;

/// Output token cap sent to both providers
pub const MAX_TOKENS: u32 = 4096;

/// Protocol version header required by the Anthropic messages API
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Build the single upstream call for a prompt
pub fn build_request(config: &ProviderConfig, prompt: &str) -> UpstreamRequest {
    match config.kind {
        ProviderKind::Claude => UpstreamRequest {
            url: config.endpoint.clone(),
            headers: vec![
                ("x-api-key", config.api_key.clone()),
                ("anthropic-version", ANTHROPIC_VERSION.to_string()),
            ],
            body: json!({
                "model": config.model,
                "max_tokens": MAX_TOKENS,
                "system": SYSTEM_PROMPT,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }),
        },
        ProviderKind::OpenRouter => UpstreamRequest {
            url: config.endpoint.clone(),
            headers: vec![("Authorization", format!("Bearer {}", config.api_key))],
            body: json!({
                "model": config.model,
                "messages": [
                    {
                        "role": "system",
                        "content": SYSTEM_PROMPT
                    },
                    {
                        "role": "user",
                        "content": prompt
                    }
                ],
                "max_tokens": MAX_TOKENS
            }),
        },
    }
}

/// Pull the generated text out of a successful response
///
/// Missing paths and non-string values yield an empty string.
pub fn extract_text(kind: ProviderKind, response: &Value) -> String {
    let text = match kind {
        ProviderKind::Claude => response
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|block| block.get("text")),
        ProviderKind::OpenRouter => response
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content")),
    };

    text.and_then(Value::as_str).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claude() -> ProviderConfig {
        ProviderConfig::new(ProviderKind::Claude, "sk-ant-test", "claude-test").unwrap()
    }

    fn openrouter() -> ProviderConfig {
        ProviderConfig::new(ProviderKind::OpenRouter, "sk-or-test", "openai/gpt-4o").unwrap()
    }

    #[test]
    fn test_claude_request_shape() {
        let request = build_request(&claude(), "a tea ceremony heist");

        assert_eq!(request.url.as_str(), "https://api.anthropic.com/v1/messages");
        assert_eq!(request.header("x-api-key"), Some("sk-ant-test"));
        assert_eq!(request.header("anthropic-version"), Some("2023-06-01"));
        assert_eq!(request.header("authorization"), None);

        assert_eq!(request.body["model"], "claude-test");
        assert_eq!(request.body["max_tokens"], 4096);
        assert_eq!(request.body["system"], SYSTEM_PROMPT);
        assert_eq!(
            request.body["messages"],
            json!([{ "role": "user", "content": "a tea ceremony heist" }])
        );
    }

    #[test]
    fn test_openrouter_request_shape() {
        let request = build_request(&openrouter(), "a tea ceremony heist");

        assert_eq!(request.url.as_str(), "https://openrouter.ai/api/v1/chat/completions");
        assert_eq!(request.header("Authorization"), Some("Bearer sk-or-test"));
        assert_eq!(request.header("x-api-key"), None);

        assert_eq!(request.body["model"], "openai/gpt-4o");
        assert_eq!(request.body["max_tokens"], 4096);
        assert!(request.body.get("system").is_none());
        assert_eq!(
            request.body["messages"],
            json!([
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": "a tea ceremony heist" }
            ])
        );
    }

    #[test]
    fn test_extract_claude_text() {
        let response = json!({
            "id": "msg_1",
            "content": [{ "type": "text", "text": "Hello" }, { "type": "text", "text": "ignored" }]
        });
        assert_eq!(extract_text(ProviderKind::Claude, &response), "Hello");
    }

    #[test]
    fn test_extract_openrouter_text() {
        let response = json!({
            "choices": [{ "message": { "role": "assistant", "content": "**Title**" } }]
        });
        assert_eq!(extract_text(ProviderKind::OpenRouter, &response), "**Title**");
    }

    #[test]
    fn test_extract_defaults_to_empty() {
        let cases = [
            (ProviderKind::Claude, json!({})),
            (ProviderKind::Claude, json!({ "content": [] })),
            (ProviderKind::Claude, json!({ "content": [{ "text": 7 }] })),
            (ProviderKind::OpenRouter, json!({ "choices": [] })),
            (ProviderKind::OpenRouter, json!({ "choices": [{ "message": {} }] })),
            (ProviderKind::OpenRouter, json!(null)),
        ];

        for (kind, response) in cases {
            assert_eq!(extract_text(kind, &response), "", "{kind} {response}");
        }
    }
}
