// src/docs/prompt.rs
// =============================================================================
// Renders a RepositoryAnalysis into the prompt sent to the language model.
//
// The layout is plain Markdown: instructions first, then the metadata,
// the root file listing and the text of every key file that was found.
// Key files that were not found are listed as such so the model does not
// invent their content.
// =============================================================================

use std::fmt::Write as _;

use crate::github::RepositoryAnalysis;

const INSTRUCTIONS: &str = "\
You are a senior engineer writing onboarding documentation for a codebase.
Using only the information below, write a Markdown document that covers:
1. What the project does and who it is for
2. How the repository is organized
3. How to install and run it
4. Key dependencies and what they are used for
5. Where a new contributor should start reading
Say so explicitly when the information below is not enough to answer a point.";

/// Builds the full prompt for `analysis`.
pub fn render_prompt(analysis: &RepositoryAnalysis, model_name: &str) -> String {
    let mut prompt = String::new();
    let info = &analysis.info;

    // Writing into a String cannot fail, so the fmt::Results are ignored
    let _ = writeln!(prompt, "{INSTRUCTIONS}");
    let _ = writeln!(prompt, "(Generated with model: {model_name})\n");

    let _ = writeln!(prompt, "## Repository information\n");
    let _ = writeln!(prompt, "- Name: {}", info.name);
    let _ = writeln!(prompt, "- Owner: {}", analysis.location.owner);
    let _ = writeln!(prompt, "- URL: {}", info.url);
    if let Some(description) = info.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(prompt, "- Description: {description}");
    }
    if let Some(stars) = info.stars {
        let _ = writeln!(prompt, "- Stars: {stars}");
    }
    if let Some(forks) = info.forks {
        let _ = writeln!(prompt, "- Forks: {forks}");
    }

    let _ = writeln!(prompt, "\n## Top-level files\n");
    if analysis.structure.is_empty() {
        let _ = writeln!(prompt, "(no matching files at the repository root)");
    }
    for entry in &analysis.structure {
        let _ = writeln!(prompt, "- {} ({} bytes)", entry.path, entry.size);
    }

    let _ = writeln!(prompt, "\n## Key files");
    for key_file in analysis.key_files.iter() {
        match &key_file.content {
            Some(content) => {
                let _ = writeln!(
                    prompt,
                    "\n### {}\n\n```\n{}\n```",
                    key_file.name,
                    content.trim_end()
                );
            }
            None => {
                let _ = writeln!(prompt, "\n### {}\n\n(not present)", key_file.name);
            }
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{EntryKind, KeyFiles, RepositoryInfo, RepositoryLocation, StructureEntry};

    fn sample() -> RepositoryAnalysis {
        let location = RepositoryLocation::parse("https://github.com/acme/widgets").unwrap();
        let info = RepositoryInfo {
            name: "widgets".to_string(),
            description: Some("Widgets for everyone".to_string()),
            url: "https://github.com/acme/widgets".to_string(),
            stars: Some(5),
            forks: Some(0),
        };
        RepositoryAnalysis {
            location,
            info,
            structure: Vec::new(),
            key_files: KeyFiles::empty(),
        }
    }

    #[test]
    fn test_prompt_contains_metadata() {
        let prompt = render_prompt(&sample(), "gemini-test");
        assert!(prompt.contains("- Name: widgets"));
        assert!(prompt.contains("- Owner: acme"));
        assert!(prompt.contains("- Description: Widgets for everyone"));
        assert!(prompt.contains("- Stars: 5"));
        assert!(prompt.contains("gemini-test"));
    }

    #[test]
    fn test_prompt_marks_missing_key_files() {
        let prompt = render_prompt(&sample(), "m");
        assert!(prompt.contains("### README.md\n\n(not present)"));
        assert!(prompt.contains("### setup.py\n\n(not present)"));
        assert!(prompt.contains("(no matching files at the repository root)"));
    }

    #[test]
    fn test_prompt_includes_structure_and_found_files() {
        let mut analysis = sample();
        analysis.structure.push(StructureEntry {
            path: "main.py".to_string(),
            kind: EntryKind::File,
            size: 120,
        });
        analysis.key_files.insert("README.md", Some("# Widgets\n\n".to_string()));

        let prompt = render_prompt(&analysis, "m");
        assert!(prompt.contains("- main.py (120 bytes)"));
        assert!(prompt.contains("### README.md\n\n```\n# Widgets\n```"));
    }

    #[test]
    fn test_degraded_info_omits_counts() {
        let mut analysis = sample();
        analysis.info =
            RepositoryInfo::minimal(&analysis.location, "https://github.com/acme/widgets");
        let prompt = render_prompt(&analysis, "m");
        assert!(!prompt.contains("Stars:"));
        assert!(!prompt.contains("Description:"));
    }
}
