//! Relay error types and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use composer::SelectionError;
use shared::GenerationResult;
use thiserror::Error;

/// Message returned for every transport or parsing failure
pub const GENERATION_FAILED: &str = "Failed to generate idea";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Prompt is required")]
    MissingPrompt,

    #[error("Prompt exceeds the {limit} character limit")]
    PromptTooLong { limit: usize },

    #[error("API key for {provider} is not configured")]
    MissingApiKey { provider: String },

    #[error("Upstream provider returned HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidSelection(#[from] SelectionError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status reported to the client
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPrompt | Self::InvalidSelection(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::PromptTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            // Upstream statuses outside the valid range cannot be echoed
            Self::Upstream { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of the response envelope
    pub fn client_message(&self) -> String {
        match self {
            Self::Upstream { body, .. } => body.clone(),
            Self::Transport(_) | Self::MalformedResponse(_) => GENERATION_FAILED.to_string(),
            Self::MissingPrompt
            | Self::PromptTooLong { .. }
            | Self::MissingApiKey { .. }
            | Self::InvalidSelection(_)
            | Self::InvalidBody(_) => self.to_string(),
            Self::Config(_) | Self::ServerStartup(_) | Self::Io(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(GenerationResult::failure(self.client_message()))).into_response()
    }
}
