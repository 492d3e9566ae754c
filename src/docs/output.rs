// src/docs/output.rs
// Writes generated documentation to `{output_dir}/{repo}_documentation.md`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::github::RepositoryLocation;

/// File the documentation for `location` is written to.
pub fn documentation_path(output_dir: &Path, location: &RepositoryLocation) -> PathBuf {
    output_dir.join(format!("{}_documentation.md", location.name))
}

/// Creates `output_dir` if needed and writes `text` verbatim.
pub fn save_documentation(
    output_dir: &Path,
    location: &RepositoryLocation,
    text: &str,
) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = documentation_path(output_dir, location);
    fs::write(&path, text)?;
    Ok(path)
}
