//! Upstream response bodies shaped like each provider's API

use serde_json::{Value, json};

/// Successful Anthropic messages response
pub fn claude_success_body(text: &str) -> Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 812, "output_tokens": 640 }
    })
}

/// Successful OpenRouter chat-completions response
pub fn openrouter_success_body(text: &str) -> Value {
    json!({
        "id": "gen-01",
        "model": "openai/gpt-4o",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": { "role": "assistant", "content": text }
        }],
        "usage": { "prompt_tokens": 812, "completion_tokens": 640, "total_tokens": 1452 }
    })
}

/// A composed prompt as the browser client would send it
pub fn sample_prompt() -> String {
    "Create an original creative idea based on these preferences:\n\n\
     Genre: Noir\n\
     Setting Country / Region: Egypt\n\n\
     Remember: Be original, avoid clichés. Create something truly unique and surprising!"
        .to_string()
}
