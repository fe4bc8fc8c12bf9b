//! Provider configuration resolved once at startup
//!
//! Values come from a lookup function so the process environment is only read
//! in `main`; tests hand in a map instead.

use std::fmt;
use url::Url;

use crate::error::{RelayError, RelayResult};

/// Environment variable choosing the provider
pub const PROVIDER_SELECTOR_VAR: &str = "WhatAIYomaWillUse";

pub const CLAUDE_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
pub const OPENROUTER_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// The two supported upstream providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Anthropic messages API
    Claude,
    /// OpenRouter chat-completions API
    OpenRouter,
}

impl ProviderKind {
    /// Claude unless the selector names something else
    pub fn from_selector(value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            None => ProviderKind::Claude,
            Some(v) if v.to_lowercase() == "claude" => ProviderKind::Claude,
            Some(_) => ProviderKind::OpenRouter,
        }
    }

    /// Name used in client-facing messages
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Claude => "Claude",
            ProviderKind::OpenRouter => "Openrouter",
        }
    }

    pub fn key_var(&self) -> &'static str {
        match self {
            ProviderKind::Claude => "ClaudeAPI",
            ProviderKind::OpenRouter => "OpenrouterAPI",
        }
    }

    pub fn model_var(&self) -> &'static str {
        match self {
            ProviderKind::Claude => "ClaudeModel",
            ProviderKind::OpenRouter => "OpenrouterModel",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Claude => "claude-sonnet-4-20250514",
            ProviderKind::OpenRouter => "openai/gpt-4o",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::Claude => CLAUDE_MESSAGES_URL,
            ProviderKind::OpenRouter => OPENROUTER_CHAT_URL,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Credentials and model for the active provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub model: String,
    pub endpoint: Url,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind, api_key: impl Into<String>, model: impl Into<String>) -> RelayResult<Self> {
        let endpoint = Url::parse(kind.default_endpoint())
            .map_err(|e| RelayError::config(format!("Invalid endpoint for {kind}: {e}")))?;

        Ok(Self {
            kind,
            api_key: api_key.into(),
            model: model.into(),
            endpoint,
        })
    }

    /// Resolve the provider from a variable lookup
    ///
    /// Empty values count as unset: the key stays empty and the model falls
    /// back to the provider default.
    pub fn resolve<F>(lookup: F) -> RelayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let kind = ProviderKind::from_selector(non_empty(PROVIDER_SELECTOR_VAR).as_deref());
        let api_key = non_empty(kind.key_var()).unwrap_or_default();
        let model = non_empty(kind.model_var()).unwrap_or_else(|| kind.default_model().to_string());

        Self::new(kind, api_key, model)
    }

    /// Resolve the provider from the process environment
    pub fn from_env() -> RelayResult<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("api_key", &if self.has_api_key() { "***" } else { "" })
            .field("model", &self.model)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

/// Immutable relay configuration shared by all requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub provider: ProviderConfig,
    /// No cap when `None`
    pub max_prompt_chars: Option<usize>,
}

impl RelayConfig {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            max_prompt_chars: None,
        }
    }

    pub fn with_max_prompt_chars(mut self, limit: Option<usize>) -> Self {
        self.max_prompt_chars = limit;
        self
    }
}
