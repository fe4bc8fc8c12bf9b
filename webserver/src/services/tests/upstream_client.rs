//! Tests for the reqwest upstream client

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{endpoint, refused_socket_addr};
use crate::error::RelayError;
use crate::services::upstream_client::RealUpstreamClient;
use crate::traits::UpstreamClient;
use crate::types::UpstreamRequest;

fn request_to(url: url::Url) -> UpstreamRequest {
    UpstreamRequest {
        url,
        headers: vec![("x-api-key", "test-key".to_string()), ("anthropic-version", "2023-06-01".to_string())],
        body: json!({ "model": "m", "messages": [] }),
    }
}

#[tokio::test]
async fn test_sends_headers_and_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "model": "m", "messages": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RealUpstreamClient::new();
    let reply = client.send(request_to(endpoint(&server.uri(), "/v1/messages"))).await.unwrap();

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, "{\"ok\":true}");
    assert!(reply.is_success());
}

#[tokio::test]
async fn test_error_status_is_a_reply_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RealUpstreamClient::new();
    let reply = client.send(request_to(endpoint(&server.uri(), "/v1/messages"))).await.unwrap();

    assert_eq!(reply.status, 503);
    assert_eq!(reply.body, "overloaded");
    assert!(!reply.is_success());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let addr = refused_socket_addr();
    let client = RealUpstreamClient::new();

    let err = client
        .send(request_to(endpoint(&format!("http://{addr}"), "/v1/messages")))
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Transport(_)));
}
