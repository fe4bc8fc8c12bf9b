//! Service trait definitions for dependency injection
//!
//! Outbound I/O is abstracted through these traits for testability

use async_trait::async_trait;

use crate::error::RelayResult;
use crate::types::{UpstreamReply, UpstreamRequest};

/// Outbound HTTP transport to the LLM provider
#[mockall::automock]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Send one request and return the status and body text
    ///
    /// Non-success statuses are replies, not errors. Only transport failures
    /// are returned as `Err`.
    async fn send(&self, request: UpstreamRequest) -> RelayResult<UpstreamReply>;
}
