// src/github/key_files.rs
// =============================================================================
// Collects a fixed set of well-known project files.
//
// The four names are always present in the result, in the same order, each
// either with its text or marked absent. A missing file is normal, and so
// is one whose content cannot be read as text: it is logged and marked
// absent. Only a transport failure from the content fetcher stops the
// collection.
// =============================================================================

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::client::GithubClient;
use super::error::{AnalyzerError, Result};
use super::locator::RepositoryLocation;

/// Files looked up in every repository, in lookup order.
pub const KEY_FILE_NAMES: [&str; 4] = [
    "README.md",
    "requirements.txt",
    "pyproject.toml",
    "setup.py",
];

/// A key file and its content, if found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFile {
    pub name: &'static str,
    pub content: Option<String>,
}

/// Ordered mapping from each name in `KEY_FILE_NAMES` to its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFiles {
    entries: Vec<KeyFile>,
}

impl KeyFiles {
    /// All four names, all absent.
    pub fn empty() -> Self {
        Self {
            entries: KEY_FILE_NAMES
                .iter()
                .map(|&name| KeyFile { name, content: None })
                .collect(),
        }
    }

    /// Content of `name`. `None` for absent files and for unknown names.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.content.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyFile> {
        self.entries.iter()
    }

    /// Number of files that were found.
    pub fn found(&self) -> usize {
        self.entries.iter().filter(|entry| entry.content.is_some()).count()
    }

    /// Records the content for `name`. Unknown names are ignored and empty
    /// content is stored as absent.
    pub fn insert(&mut self, name: &str, content: Option<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.content = content.filter(|text| !text.is_empty());
        }
    }
}

// Serialized as a JSON object in lookup order, absent files as null
impl Serialize for KeyFiles {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.name, &entry.content)?;
        }
        map.end()
    }
}

impl GithubClient {
    /// Fetches every file in `KEY_FILE_NAMES` through `get_file`.
    pub async fn collect_key_files(&self, location: &RepositoryLocation) -> Result<KeyFiles> {
        let mut key_files = KeyFiles::empty();

        for name in KEY_FILE_NAMES {
            let content = match self.get_file(location, name).await {
                Ok(content) => content,
                Err(e @ AnalyzerError::Fetch { .. }) => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        file = name,
                        error = %e,
                        "unreadable key file, treating as absent"
                    );
                    None
                }
            };
            tracing::debug!(file = name, found = content.is_some(), "key file lookup");
            key_files.insert(name, content);
        }

        Ok(key_files)
    }
}
