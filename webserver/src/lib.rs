//! Webserver library for the idea generator
//!
//! Relays composed prompts to the configured LLM provider (Claude or an
//! OpenRouter model) and normalizes every outcome into a `{result}` or
//! `{error}` JSON envelope.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod system_prompt;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{ProviderConfig, ProviderKind, RelayConfig};
pub use crate::core::Relay;
pub use error::{RelayError, RelayResult};
pub use webserver_impl::WebServer;
pub use types::*;

// Re-export trait definitions
pub use traits::{MockUpstreamClient, UpstreamClient};

// Re-export service implementations
pub use services::RealUpstreamClient;
