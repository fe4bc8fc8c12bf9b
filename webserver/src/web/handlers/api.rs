//! REST API handlers
//!
//! `/api/generate` is the relay itself; the other endpoints expose the
//! settings catalog and prompt composer to thin clients.

use axum::{
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Json, Response},
};
use composer::{CATALOG, Selections, SettingEntry, compose_prompt};
use shared::{ComposeRequest, ComposeResponse, GenerateRequest, GenerationResult, HealthStatus};

use crate::error::{RelayError, RelayResult};
use crate::traits::UpstreamClient;
use crate::webserver_impl::WebServer;

/// Generate an idea - /api/generate
///
/// Bodies that fail to parse are handled like a body without a prompt. A
/// body that could not be read at all is reported as such.
pub async fn generate<U>(
    State(webserver): State<WebServer<U>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response
where
    U: UpstreamClient + 'static,
{
    let request = match body {
        Ok(Json(request)) => request,
        Err(JsonRejection::BytesRejection(rejection)) => {
            return RelayError::InvalidBody(rejection.body_text()).into_response();
        }
        Err(_) => GenerateRequest::default(),
    };

    match webserver.relay().generate(&request).await {
        Ok(text) => Json(GenerationResult::success(text)).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Compose a prompt from selections - /api/compose
pub async fn compose(body: Result<Json<ComposeRequest>, JsonRejection>) -> RelayResult<Json<ComposeResponse>> {
    let Json(request) = body.map_err(|rejection| RelayError::InvalidBody(rejection.body_text()))?;

    let selections = Selections::from_map(&request.selections)?;
    let prompt = compose_prompt(&selections, &request.additional_details);

    Ok(Json(ComposeResponse { prompt }))
}

/// Settings catalog - /api/settings
pub async fn settings() -> Json<&'static [SettingEntry]> {
    Json(CATALOG)
}

/// Health check - /health
pub async fn health<U>(State(webserver): State<WebServer<U>>) -> Json<HealthStatus>
where
    U: UpstreamClient + 'static,
{
    let provider = &webserver.relay().config().provider;

    Json(HealthStatus {
        status: "ok".to_string(),
        provider: provider.kind.name().to_string(),
        model: provider.model.clone(),
        api_key_configured: provider.has_api_key(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
