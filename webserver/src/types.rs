//! Upstream request and reply types

use std::fmt;

use serde_json::Value;
use url::Url;

/// A fully built upstream call, ready to send
///
/// Credential header values are redacted from `Debug` output.
#[derive(Clone, PartialEq)]
pub struct UpstreamRequest {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl UpstreamRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

const CREDENTIAL_HEADERS: &[&str] = &["x-api-key", "authorization"];

impl fmt::Debug for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let secret = CREDENTIAL_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name));
                (*name, if secret { "***" } else { value.as_str() })
            })
            .collect();

        f.debug_struct("UpstreamRequest")
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Raw upstream reply: status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
