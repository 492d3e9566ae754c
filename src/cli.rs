// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Two subcommands share one set of global options:
// - analyze:  fetch and summarize a repository, no API key needed
// - generate: analyze, then have Gemini write documentation and save it
//
// Every option that is configuration rather than input can also come from
// an environment variable (GOOGLE_API_KEY, GEMINI_MODEL, GITHUB_API_URL...).
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::docs::DEFAULT_MODEL;
use crate::github::{DEFAULT_API_BASE, DEFAULT_RAW_BASE};

#[derive(Parser, Debug)]
#[command(
    name = "repo-docent",
    version,
    about = "Summarize a public GitHub repository and generate documentation for it",
    long_about = "repo-docent reads a public GitHub repository's metadata, top-level files and key \
                  project files, then asks a Gemini model to write onboarding documentation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalOptions {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Base URL of the raw file host
    #[arg(long, env = "GITHUB_RAW_URL", default_value = DEFAULT_RAW_BASE, global = true)]
    pub raw_base: String,

    /// Minimum delay between two GitHub requests, in milliseconds
    #[arg(long, default_value_t = 1000, global = true)]
    pub min_interval_ms: u64,

    /// Timeout for each outbound HTTP request, in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch repository metadata, top-level files and key files
    ///
    /// Example: repo-docent analyze https://github.com/psf/requests
    Analyze {
        /// Repository URL (e.g., https://github.com/owner/repo)
        repo_url: String,

        /// Print the analysis as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Analyze a repository and generate documentation with Gemini
    ///
    /// Example: repo-docent generate https://github.com/psf/requests --output-dir docs
    Generate {
        /// Repository URL (e.g., https://github.com/owner/repo)
        repo_url: String,

        /// Gemini model used for generation
        #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
        model: String,

        /// Google AI API key
        #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Directory the documentation file is written to
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,

        /// Also print the analysis as JSON before the documentation
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults() {
        let cli =
            Cli::try_parse_from(["repo-docent", "analyze", "https://github.com/acme/widgets"])
                .unwrap();
        assert_eq!(cli.global.min_interval_ms, 1000);
        assert_eq!(cli.global.timeout_secs, 30);
        match cli.command {
            Commands::Analyze { repo_url, json } => {
                assert_eq!(repo_url, "https://github.com/acme/widgets");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_with_explicit_key() {
        let cli = Cli::try_parse_from([
            "repo-docent",
            "-vv",
            "generate",
            "acme/widgets",
            "--api-key",
            "secret",
            "--model",
            "gemini-test",
            "--output-dir",
            "docs",
        ])
        .unwrap();

        assert_eq!(cli.global.verbose, 2);
        match cli.command {
            Commands::Generate {
                api_key,
                model,
                output_dir,
                ..
            } => {
                assert_eq!(api_key, "secret");
                assert_eq!(model, "gemini-test");
                assert_eq!(output_dir, PathBuf::from("docs"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
