// src/github/content.rs
// =============================================================================
// Fetches the text of a single file, trying two channels in order:
//
//   1. raw.githubusercontent.com/{owner}/{repo}/main/{path}
//      Serves the file as-is and does not count against the API quota.
//   2. api.github.com/repos/{owner}/{repo}/contents/{path}
//      Returns JSON with the file base64-encoded in a `content` field.
//
// Tier 1 always asks for branch "main". Repositories with another default
// branch miss there and pay the extra round trip to tier 2 every time.
//
// A file that neither tier has is Ok(None), not an error.
// =============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

use super::client::GithubClient;
use super::error::{AnalyzerError, Result};
use super::locator::RepositoryLocation;
use super::transport::GITHUB_JSON;

/// Branch requested from the raw-content host.
pub const RAW_BRANCH: &str = "main";

impl GithubClient {
    /// Returns the text of `path`, or `None` when the file cannot be found.
    pub async fn get_file(
        &self,
        location: &RepositoryLocation,
        path: &str,
    ) -> Result<Option<String>> {
        // Tier 1: raw host, no Accept header
        let raw_url = format!(
            "{}/{}/{}/{}/{}",
            self.endpoints().raw_base(),
            location.owner,
            location.name,
            RAW_BRANCH,
            path
        );
        let response = self.get(&raw_url, None).await?;
        if response.is_ok() {
            return Ok(Some(response.body));
        }

        tracing::debug!(
            path,
            status = response.status,
            "raw content missed, asking the contents API"
        );

        // Tier 2: contents API
        let api_url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.endpoints().api_base(),
            location.owner,
            location.name,
            path
        );
        let response = self.get(&api_url, Some(GITHUB_JSON)).await?;
        if !response.is_ok() {
            return Ok(None);
        }

        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|source| AnalyzerError::InvalidPayload { url: api_url, source })?;

        // A directory comes back as an array and has no `content` field
        match payload.get("content").and_then(Value::as_str) {
            Some(encoded) => decode_content(path, encoded).map(Some),
            None => Ok(None),
        }
    }
}

/// Decodes the base64 `content` field of a contents API response.
///
/// GitHub wraps the encoded text at 60 columns, so whitespace is dropped
/// before decoding.
fn decode_content(path: &str, encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = STANDARD.decode(compact).map_err(|e| AnalyzerError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| AnalyzerError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
