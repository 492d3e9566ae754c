// src/github/client.rs
// =============================================================================
// GithubClient bundles what every fetcher needs:
// - the transport that actually performs requests
// - the shared request throttle
// - the base URLs of the metadata API and the raw-content host
//
// The fetch operations themselves live in sibling modules (repository.rs,
// content.rs, structure.rs, key_files.rs) as extra `impl GithubClient`
// blocks, one file per concern.
// =============================================================================

use std::sync::Arc;

use url::Url;

use super::error::{AnalyzerError, Result};
use super::throttle::RequestThrottle;
use super::transport::{HttpResponse, HttpTransport};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Base URLs for the two hosts we talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    raw_base: String,
}

impl Endpoints {
    /// Validates both base URLs and drops any trailing slash so paths can be
    /// appended with a plain `format!`.
    pub fn new(api_base: &str, raw_base: &str) -> std::result::Result<Self, url::ParseError> {
        Ok(Self {
            api_base: normalize_base(api_base)?,
            raw_base: normalize_base(raw_base)?,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn raw_base(&self) -> &str {
        &self.raw_base
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
        }
    }
}

fn normalize_base(base: &str) -> std::result::Result<String, url::ParseError> {
    let parsed = Url::parse(base)?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Client for the repository hosting provider.
#[derive(Clone)]
pub struct GithubClient {
    transport: Arc<dyn HttpTransport>,
    throttle: Arc<RequestThrottle>,
    endpoints: Endpoints,
}

impl GithubClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        throttle: Arc<RequestThrottle>,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            transport,
            throttle,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Throttled GET. Transport failures become `AnalyzerError::Fetch`;
    /// every HTTP status is handed back to the caller to interpret.
    pub(crate) async fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse> {
        self.throttle.wait_if_needed().await;
        tracing::debug!(url, "GET");

        self.transport
            .get(url, accept)
            .await
            .map_err(|source| AnalyzerError::Fetch {
                url: url.to_string(),
                source,
            })
    }
}
