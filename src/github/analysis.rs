// src/github/analysis.rs
// =============================================================================
// Runs the whole fetch pipeline for one repository:
//
//   URL -> location -> metadata -> root listing -> key files
//
// Steps run one after another through the same client, so the shared
// throttle spaces out every request. The first propagated error aborts.
// =============================================================================

use serde::Serialize;

use super::client::GithubClient;
use super::error::Result;
use super::key_files::KeyFiles;
use super::locator::RepositoryLocation;
use super::repository::RepositoryInfo;
use super::structure::StructureEntry;

/// Everything the documentation generator gets to see about a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryAnalysis {
    pub location: RepositoryLocation,
    pub info: RepositoryInfo,
    pub structure: Vec<StructureEntry>,
    pub key_files: KeyFiles,
}

impl GithubClient {
    /// Analyzes the repository at `repo_url`.
    pub async fn analyze(&self, repo_url: &str) -> Result<RepositoryAnalysis> {
        let location = RepositoryLocation::parse(repo_url)?;
        tracing::info!(repository = %location, "analyzing repository");

        let info = self.fetch_repository(&location, repo_url).await?;
        tracing::info!(name = %info.name, "repository metadata fetched");

        let structure = self.list_files(&location).await?;
        tracing::info!(files = structure.len(), "repository structure listed");

        let key_files = self.collect_key_files(&location).await?;
        tracing::info!(found = key_files.found(), "key files collected");

        Ok(RepositoryAnalysis {
            location,
            info,
            structure,
            key_files,
        })
    }
}
