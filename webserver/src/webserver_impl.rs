//! Main webserver implementation
//!
//! This module contains the WebServer struct that owns the relay and its
//! injected upstream client and exposes them through an axum router.

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::core::Relay;
use crate::error::{RelayError, RelayResult};
use crate::traits::UpstreamClient;
use crate::web::handlers;

/// Tracing field value identifying this service
pub const SERVICE: &str = "webserver";

/// Main webserver struct with dependency injection
pub struct WebServer<U> {
    relay: Arc<Relay<U>>,
    static_dir: Option<PathBuf>,
}

// Manual impl: cloning shares the relay and must not require `U: Clone`
impl<U> Clone for WebServer<U> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
            static_dir: self.static_dir.clone(),
        }
    }
}

impl<U> WebServer<U>
where
    U: UpstreamClient + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(config: RelayConfig, upstream: U) -> Self {
        Self {
            relay: Arc::new(Relay::new(config, upstream)),
            static_dir: None,
        }
    }

    /// Serve a built frontend from `dir`, falling back to its `index.html`
    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }

    pub fn relay(&self) -> &Relay<U> {
        &self.relay
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            // Relay
            .route("/api/generate", post(handlers::generate::<U>))
            // Catalog and composer
            .route("/api/settings", get(handlers::settings))
            .route("/api/compose", post(handlers::compose))
            // Health check
            .route("/health", get(handlers::health::<U>));

        if let Some(dir) = &self.static_dir {
            let index = ServeFile::new(dir.join("index.html"));
            router = router.fallback_service(ServeDir::new(dir).fallback(index));
        }

        // Prompt length is governed by `max_prompt_chars` alone
        router
            .layer(DefaultBodyLimit::disable())
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> RelayResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Bind `addr` and serve until Ctrl+C
    pub async fn run(&self, addr: SocketAddr) -> RelayResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| RelayError::ServerStartup(format!("Failed to bind to {}: {}", addr, e)))?;

        shared::logging::log_success(SERVICE, &format!("Relay listening on http://{}", addr));

        self.serve(listener, shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => shared::logging::log_shutdown(SERVICE, "Received Ctrl+C signal"),
        Err(err) => shared::logging::log_error(SERVICE, "Signal handling", &err),
    }
}
