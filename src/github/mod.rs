// src/github/mod.rs
// =============================================================================
// This module talks to GitHub and builds a RepositoryAnalysis.
//
// Submodules:
// - locator: repository URL -> (owner, name)
// - throttle: minimum spacing between outbound requests
// - transport: HTTP seam (reqwest in production, a fake in tests)
// - client: GithubClient, shared by every fetcher below
// - repository / content / structure / key_files: one fetch concern each
// - analysis: runs the fetchers in order
// =============================================================================

mod analysis;
mod client;
mod content;
mod error;
mod key_files;
mod locator;
mod repository;
mod structure;
mod throttle;
mod transport;

pub use analysis::RepositoryAnalysis;
pub use client::{Endpoints, GithubClient, DEFAULT_API_BASE, DEFAULT_RAW_BASE};
pub use key_files::KeyFiles;
pub use locator::RepositoryLocation;
pub use repository::RepositoryInfo;
pub use structure::{EntryKind, StructureEntry};
pub use throttle::RequestThrottle;
pub use transport::ReqwestTransport;
