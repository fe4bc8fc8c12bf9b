//! reqwest-backed upstream transport

use async_trait::async_trait;

use crate::error::RelayResult;
use crate::traits::UpstreamClient;
use crate::types::{UpstreamReply, UpstreamRequest};

/// Real upstream client sharing one connection pool
///
/// No timeout is configured beyond reqwest's defaults.
#[derive(Clone, Default)]
pub struct RealUpstreamClient {
    http: reqwest::Client,
}

impl RealUpstreamClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl UpstreamClient for RealUpstreamClient {
    async fn send(&self, request: UpstreamRequest) -> RelayResult<UpstreamReply> {
        let mut builder = self.http.post(request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.json(&request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(UpstreamReply { status, body })
    }
}
