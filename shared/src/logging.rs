//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::errors::{SharedError, SharedResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Build the per-crate filter directives for a base level
pub fn filter_directives(log_level: Option<&str>) -> SharedResult<String> {
    let base_level = log_level.unwrap_or("info").to_lowercase();

    if !LOG_LEVELS.contains(&base_level.as_str()) {
        return Err(SharedError::InvalidConfig {
            field: "log_level".to_string(),
            value: base_level,
        });
    }

    Ok(format!(
        "webserver={base_level},shared={base_level},tower_http={base_level},reqwest=warn"
    ))
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins over the computed directives when it is set.
pub fn init_tracing(log_level: Option<&str>) -> SharedResult<()> {
    use tracing_subscriber::fmt;

    let env_filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(filter_directives(log_level)?),
    };

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| SharedError::TracingInit { message: e.to_string() })
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(service: &str, details: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service: &str, reason: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = service,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service: &str, message: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
