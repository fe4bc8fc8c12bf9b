//! One generation request, from validated prompt to extracted text

use shared::GenerateRequest;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::core::provider;
use crate::error::{RelayError, RelayResult};
use crate::traits::UpstreamClient;

/// Forwards prompts to the configured provider
///
/// Holds no mutable state: every call is independent and makes at most one
/// upstream request, with no retry.
pub struct Relay<U> {
    config: RelayConfig,
    upstream: U,
}

impl<U> Relay<U>
where
    U: UpstreamClient,
{
    pub fn new(config: RelayConfig, upstream: U) -> Self {
        Self {
            config,
            upstream,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Validate the request, call the provider and return the generated text
    pub async fn generate(&self, request: &GenerateRequest) -> RelayResult<String> {
        let prompt = request.prompt().ok_or(RelayError::MissingPrompt)?;

        if let Some(limit) = self.config.max_prompt_chars {
            if prompt.chars().count() > limit {
                return Err(RelayError::PromptTooLong { limit });
            }
        }

        let provider = &self.config.provider;
        if !provider.has_api_key() {
            return Err(RelayError::MissingApiKey {
                provider: provider.kind.name().to_string(),
            });
        }

        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            provider = %provider.kind,
            model = %provider.model,
            prompt_chars = prompt.chars().count(),
            "Forwarding prompt upstream"
        );

        let outcome = self.call_upstream(prompt).await;

        match &outcome {
            Ok(text) => info!(%request_id, provider = %provider.kind, result_chars = text.len(), "Generation succeeded"),
            Err(RelayError::Upstream { status, body }) => {
                warn!(%request_id, provider = %provider.kind, status, body = %body, "Upstream rejected the request")
            }
            Err(e) => error!(%request_id, provider = %provider.kind, error = %e, "AI API error"),
        }

        outcome
    }

    async fn call_upstream(&self, prompt: &str) -> RelayResult<String> {
        let provider = &self.config.provider;
        let reply = self.upstream.send(provider::build_request(provider, prompt)).await?;

        if !reply.is_success() {
            return Err(RelayError::Upstream {
                status: reply.status,
                body: reply.body,
            });
        }

        let payload: serde_json::Value = serde_json::from_str(&reply.body)?;
        Ok(provider::extract_text(provider.kind, &payload))
    }
}
