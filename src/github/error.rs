// src/github/error.rs
// =============================================================================
// Error types for the GitHub fetch pipeline.
//
// Two kinds of "failure" exist in this pipeline and they are kept apart:
// - A file or repository that is simply not there: NOT an error. Fetchers
//   return Ok(None) or a degraded record for that.
// - A request that never got a response, or a response we cannot read:
//   that IS an error, and it lands in one of the variants below.
// =============================================================================

use thiserror::Error;

/// Boxed error returned by an HTTP transport when no response was received.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while analyzing a repository.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The input did not contain `owner/name` path segments.
    #[error("Malformed repository URL '{0}': expected at least two path segments (owner/name)")]
    MalformedUrl(String),

    /// Transport-level failure: no HTTP response at all.
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: TransportError,
    },

    /// The root directory listing returned something other than HTTP 200.
    #[error("Failed to list repository contents: HTTP {status}")]
    Structure { status: u16 },

    /// A 200 response whose body was not the JSON we expected.
    #[error("Unexpected payload from {url}: {source}")]
    InvalidPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Base64 content from the contents API that is not valid UTF-8 text.
    #[error("Could not decode content of '{path}': {reason}")]
    Decode { path: String, reason: String },
}

/// Shorthand used by every fetcher in this module.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
