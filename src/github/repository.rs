// src/github/repository.rs
// =============================================================================
// Repository metadata: name, description, URL, star and fork counts.
//
// Policy:
// - HTTP 200: every field filled in, with a default for anything missing
// - any other status: degrade to just {name, url} and keep going
// - no response at all: AnalyzerError::Fetch
// =============================================================================

use serde::Serialize;
use serde_json::Value;

use super::client::GithubClient;
use super::error::{AnalyzerError, Result};
use super::locator::RepositoryLocation;
use super::transport::GITHUB_JSON;

/// Repository metadata as shown to the user and fed to the prompt.
///
/// `stars`, `forks` and `description` are `None` only in the degraded record
/// built when the metadata endpoint did not answer 200. A JSON `null`
/// description on a 200 response also stays `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
}

impl RepositoryInfo {
    /// The degraded record: name from the URL, the URL as given.
    pub fn minimal(location: &RepositoryLocation, original_url: &str) -> Self {
        Self {
            name: location.name.clone(),
            description: None,
            url: original_url.to_string(),
            stars: None,
            forks: None,
        }
    }

    /// Builds the record from a `/repos/{owner}/{repo}` payload, field by field.
    fn from_payload(payload: &Value, location: &RepositoryLocation, original_url: &str) -> Self {
        let text = |key: &str| payload.get(key).and_then(Value::as_str).map(str::to_string);
        let count = |key: &str| payload.get(key).and_then(Value::as_u64).unwrap_or(0);

        // Missing key -> "", explicit null -> None
        let description = match payload.get("description") {
            None => Some(String::new()),
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => None,
        };

        Self {
            name: text("name").unwrap_or_else(|| location.name.clone()),
            description,
            url: text("html_url").unwrap_or_else(|| original_url.to_string()),
            stars: Some(count("stargazers_count")),
            forks: Some(count("forks_count")),
        }
    }
}

impl GithubClient {
    /// Fetches metadata for `location`. `original_url` is what the user typed
    /// and is used as the fallback URL.
    pub async fn fetch_repository(
        &self,
        location: &RepositoryLocation,
        original_url: &str,
    ) -> Result<RepositoryInfo> {
        let url = format!(
            "{}/repos/{}/{}",
            self.endpoints().api_base(),
            location.owner,
            location.name
        );
        let response = self.get(&url, Some(GITHUB_JSON)).await?;

        if !response.is_ok() {
            tracing::warn!(
                status = response.status,
                repository = %location,
                "metadata unavailable, continuing with minimal repository info"
            );
            return Ok(RepositoryInfo::minimal(location, original_url));
        }

        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|source| AnalyzerError::InvalidPayload { url, source })?;

        Ok(RepositoryInfo::from_payload(&payload, location, original_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::client::test_support::client_with;
    use crate::github::transport::fake::FakeTransport;
    use std::sync::Arc;

    const REPO_URL: &str = "https://github.com/acme/widgets";
    const META_URL: &str = "https://api.github.com/repos/acme/widgets";

    fn acme() -> RepositoryLocation {
        RepositoryLocation::parse(REPO_URL).unwrap()
    }

    #[tokio::test]
    async fn test_missing_fields_get_defaults() {
        let fake = Arc::new(FakeTransport::new().respond(
            META_URL,
            200,
            r#"{"name":"widgets","stargazers_count":5}"#,
        ));
        let info = client_with(fake).fetch_repository(&acme(), REPO_URL).await.unwrap();

        assert_eq!(
            info,
            RepositoryInfo {
                name: "widgets".to_string(),
                description: Some(String::new()),
                url: REPO_URL.to_string(),
                stars: Some(5),
                forks: Some(0),
            }
        );
    }

    #[tokio::test]
    async fn test_full_payload_is_used() {
        let body = r#"{
            "name": "Widgets",
            "description": "Widgets for everyone",
            "html_url": "https://github.com/acme/Widgets",
            "stargazers_count": 120,
            "forks_count": 7
        }"#;
        let fake = Arc::new(FakeTransport::new().respond(META_URL, 200, body));
        let info = client_with(fake.clone())
            .fetch_repository(&acme(), REPO_URL)
            .await
            .unwrap();

        assert_eq!(info.name, "Widgets");
        assert_eq!(info.description.as_deref(), Some("Widgets for everyone"));
        assert_eq!(info.url, "https://github.com/acme/Widgets");
        assert_eq!(info.stars, Some(120));
        assert_eq!(info.forks, Some(7));
        assert_eq!(fake.accept_header_for(META_URL).as_deref(), Some(GITHUB_JSON));
    }

    #[tokio::test]
    async fn test_null_description_stays_none() {
        let fake = Arc::new(FakeTransport::new().respond(
            META_URL,
            200,
            r#"{"name":"widgets","description":null}"#,
        ));
        let info = client_with(fake).fetch_repository(&acme(), REPO_URL).await.unwrap();
        assert_eq!(info.description, None);
        assert_eq!(info.stars, Some(0));
    }

    #[tokio::test]
    async fn test_non_200_degrades_to_minimal_record() {
        let fake = Arc::new(FakeTransport::new().respond(META_URL, 403, "rate limited"));
        let info = client_with(fake).fetch_repository(&acme(), REPO_URL).await.unwrap();

        assert_eq!(info, RepositoryInfo::minimal(&acme(), REPO_URL));
        assert_eq!(info.description, None);
        assert_eq!(info.stars, None);
        assert_eq!(info.forks, None);
    }

    #[tokio::test]
    async fn test_transport_failure_is_fetch_error() {
        let fake = Arc::new(FakeTransport::new().fail(META_URL, "dns failure"));
        let result = client_with(fake).fetch_repository(&acme(), REPO_URL).await;
        assert!(matches!(result, Err(AnalyzerError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_garbage_body_is_invalid_payload() {
        let fake = Arc::new(FakeTransport::new().respond(META_URL, 200, "<html>"));
        let result = client_with(fake).fetch_repository(&acme(), REPO_URL).await;
        assert!(matches!(result, Err(AnalyzerError::InvalidPayload { .. })));
    }

    #[test]
    fn test_minimal_record_serializes_name_and_url_only() {
        let json = serde_json::to_value(RepositoryInfo::minimal(&acme(), REPO_URL)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "widgets", "url": REPO_URL})
        );
    }
}
