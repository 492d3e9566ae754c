// src/github/transport.rs
// =============================================================================
// The seam between the fetch pipeline and the network.
//
// Fetchers only need "GET this URL, tell me the status and the body".
// Hiding reqwest behind a small trait lets the tests swap in an in-memory
// fake and check exactly which URLs were requested, in which order.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::error::TransportError;

/// Media type the GitHub REST API expects on every metadata call.
pub const GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// User agent sent with every request (GitHub rejects requests without one).
pub const DEFAULT_USER_AGENT: &str = concat!("repo-docent/", env!("CARGO_PKG_VERSION"));

/// Status code and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Anything that can perform a GET request.
///
/// `Err` means no response was received at all. Any HTTP status, including
/// 404 and 500, is a successful exchange and comes back as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse, TransportError>;
}

/// Production transport built on a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with an explicit per-request timeout.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(url, status, bytes = body.len(), "GET completed");
        Ok(HttpResponse { status, body })
    }
}
