// src/github/structure.rs
// =============================================================================
// Lists the files at the repository root that are worth summarizing.
//
// This is a single directory listing, not a tree walk: subdirectories are
// skipped, and so is any file whose extension is not on the allowlist.
// Unlike the other fetchers there is no degraded result here. Without a
// listing there is nothing meaningful to document, so any non-200 status
// is an AnalyzerError::Structure.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::client::GithubClient;
use super::error::{AnalyzerError, Result};
use super::locator::RepositoryLocation;
use super::transport::GITHUB_JSON;

/// File extensions kept in the structure listing.
pub const ALLOWED_EXTENSIONS: [&str; 5] = [".py", ".md", ".txt", ".yaml", ".yml"];

/// Kind of a structure entry. Only files make it into the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
}

/// One file at the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: u64,
}

// The subset of a contents API item we read
#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    path: String,
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    size: u64,
}

impl ContentItem {
    fn is_listed(&self) -> bool {
        self.item_type == "file" && ALLOWED_EXTENSIONS.iter().any(|ext| self.name.ends_with(ext))
    }
}

impl GithubClient {
    /// Lists allow-listed files at the repository root, in provider order.
    pub async fn list_files(&self, location: &RepositoryLocation) -> Result<Vec<StructureEntry>> {
        let url = format!(
            "{}/repos/{}/{}/contents",
            self.endpoints().api_base(),
            location.owner,
            location.name
        );
        let response = self.get(&url, Some(GITHUB_JSON)).await?;

        if !response.is_ok() {
            return Err(AnalyzerError::Structure {
                status: response.status,
            });
        }

        let items: Vec<ContentItem> = serde_json::from_str(&response.body)
            .map_err(|source| AnalyzerError::InvalidPayload { url, source })?;

        let entries: Vec<StructureEntry> = items
            .into_iter()
            .filter(ContentItem::is_listed)
            .map(|item| StructureEntry {
                path: item.path,
                kind: EntryKind::File,
                size: item.size,
            })
            .collect();

        tracing::debug!(repository = %location, files = entries.len(), "structure listed");
        Ok(entries)
    }
}
