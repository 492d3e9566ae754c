// src/github/locator.rs
// =============================================================================
// Turns a repository URL into an (owner, name) pair.
//
// The rule is deliberately loose: strip slashes at both ends, split on '/',
// keep the last two segments. There is no host check, so
//   "https://github.com/acme/widgets"  -> ("acme", "widgets")
//   "acme/widgets/"                    -> ("acme", "widgets")
//   "https://gitlab.com/acme/widgets"  -> ("acme", "widgets")
// A non-GitHub URL simply fails later, at the HTTP layer.
// =============================================================================

use serde::Serialize;

use super::error::{AnalyzerError, Result};

/// Owner and name of a repository on the hosting provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryLocation {
    pub owner: String,
    pub name: String,
}

impl RepositoryLocation {
    /// Parses `url` by taking its last two '/'-delimited segments.
    ///
    /// Returns `AnalyzerError::MalformedUrl` when fewer than two non-empty
    /// segments are left after trimming.
    pub fn parse(url: &str) -> Result<Self> {
        let trimmed = url.trim_matches('/');

        // rsplitn walks from the right, so the first item is the name
        let mut parts = trimmed.rsplitn(3, '/');
        let name = parts.next().unwrap_or_default();
        let owner = match parts.next() {
            Some(owner) => owner,
            None => return Err(AnalyzerError::MalformedUrl(url.to_string())),
        };

        // "a//b" leaves an empty owner between the slashes
        if owner.is_empty() || name.is_empty() {
            return Err(AnalyzerError::MalformedUrl(url.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for RepositoryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let location = RepositoryLocation::parse("https://github.com/acme/widgets").unwrap();
        assert_eq!(location.owner, "acme");
        assert_eq!(location.name, "widgets");
    }

    #[test]
    fn test_parse_ignores_trailing_slashes() {
        let location = RepositoryLocation::parse("https://github.com/rust-lang/rust//").unwrap();
        assert_eq!(location.owner, "rust-lang");
        assert_eq!(location.name, "rust");
    }

    #[test]
    fn test_parse_bare_owner_and_name() {
        let location = RepositoryLocation::parse("/acme/widgets").unwrap();
        assert_eq!(location.to_string(), "acme/widgets");
    }

    #[test]
    fn test_parse_takes_last_two_segments() {
        // No host validation: deeper paths and other hosts are accepted as-is
        let location = RepositoryLocation::parse("https://gitlab.com/group/sub/project").unwrap();
        assert_eq!(location.owner, "sub");
        assert_eq!(location.name, "project");
    }

    #[test]
    fn test_parse_single_segment_is_malformed() {
        let result = RepositoryLocation::parse("widgets/");
        assert!(matches!(result, Err(AnalyzerError::MalformedUrl(_))));
    }

    #[test]
    fn test_parse_empty_input_is_malformed() {
        assert!(matches!(
            RepositoryLocation::parse("///"),
            Err(AnalyzerError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_parse_empty_owner_segment_is_malformed() {
        assert!(matches!(
            RepositoryLocation::parse("acme//widgets"),
            Err(AnalyzerError::MalformedUrl(_))
        ));
    }
}
