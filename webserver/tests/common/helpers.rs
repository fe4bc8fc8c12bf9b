//! Test helper utilities for webserver integration tests

use std::net::{SocketAddr, TcpListener};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use webserver::{ProviderConfig, ProviderKind, RelayConfig};

/// Relay config pointing the provider at `endpoint`
pub fn relay_config(kind: ProviderKind, api_key: &str, endpoint: &str) -> RelayConfig {
    let provider = ProviderConfig::new(kind, api_key, kind.default_model())
        .unwrap()
        .with_endpoint(Url::parse(endpoint).unwrap());
    RelayConfig::new(provider)
}

/// Loopback address with nothing listening, for the integration binaries
///
/// Mirrors the unit-test helper in `services/tests`, which is `cfg(test)` only
/// and not visible from here.
pub fn refused_socket_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Send one request through the router and return status, headers and raw body
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

/// Send a JSON request and decode the JSON response
pub async fn send_json(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let (status, _, bytes) = send(router, request).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// POST a JSON body to `/api/generate`
pub async fn post_generate(router: Router, body: Value) -> (StatusCode, Value) {
    send_json(router, Method::POST, "/api/generate", Some(body)).await
}
