// src/main.rs
// =============================================================================
// Entry point of repo-docent.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, level from -v or RUST_LOG)
// 3. Build the GitHub client: transport + shared throttle + endpoints
// 4. Dispatch to the subcommand handler
// 5. Exit with 0 on success, 2 on any error
// =============================================================================

mod cli;
mod docs;
mod github;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, GlobalOptions};
use github::{Endpoints, GithubClient, RepositoryAnalysis, RequestThrottle, ReqwestTransport};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG wins when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let client = build_client(&cli.global)?;
    let timeout = Duration::from_secs(cli.global.timeout_secs);

    match cli.command {
        Commands::Analyze { repo_url, json } => handle_analyze(&client, &repo_url, json).await,
        Commands::Generate {
            repo_url,
            model,
            api_key,
            output_dir,
            json,
        } => {
            let generator = docs::GeminiGenerator::new(api_key, model, timeout)
                .context("Failed to create the Gemini client")?;
            handle_generate(&client, &generator, &repo_url, &output_dir, json).await
        }
    }
}

fn build_client(options: &GlobalOptions) -> Result<GithubClient> {
    let endpoints = Endpoints::new(&options.api_base, &options.raw_base)
        .context("Invalid GitHub base URL")?;
    let transport = ReqwestTransport::new(Duration::from_secs(options.timeout_secs))
        .context("Failed to create the HTTP client")?;
    let throttle = RequestThrottle::new(Duration::from_millis(options.min_interval_ms));

    Ok(GithubClient::new(
        Arc::new(transport),
        Arc::new(throttle),
        endpoints,
    ))
}

// Handles the 'analyze' subcommand
async fn handle_analyze(client: &GithubClient, repo_url: &str, json: bool) -> Result<()> {
    eprintln!("🔍 Analyzing repository: {}", repo_url);

    let analysis = analyze(client, repo_url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_summary(&analysis);
    }
    Ok(())
}

// Handles the 'generate' subcommand
async fn handle_generate(
    client: &GithubClient,
    generator: &dyn docs::TextGenerator,
    repo_url: &str,
    output_dir: &Path,
    json: bool,
) -> Result<()> {
    eprintln!("🔍 Analyzing repository: {}", repo_url);

    let analysis = analyze(client, repo_url).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_summary(&analysis);
    }

    eprintln!("\n✍️  Generating documentation with {}...", generator.model_name());
    let documentation = docs::generate_documentation(generator, &analysis)
        .await
        .context("Failed to generate documentation")?;

    println!("\n{}", documentation);

    let path = docs::save_documentation(output_dir, &analysis.location, &documentation)
        .with_context(|| format!("Failed to save documentation under {}", output_dir.display()))?;
    eprintln!("✅ Documentation saved to {}", path.display());
    Ok(())
}

async fn analyze(client: &GithubClient, repo_url: &str) -> Result<RepositoryAnalysis> {
    client
        .analyze(repo_url)
        .await
        .context("Failed to analyze repository")
}

// Prints repository info, structure and key-file status as a short report
fn print_summary(analysis: &RepositoryAnalysis) {
    let info = &analysis.info;

    println!("📦 {} ({})", info.name, info.url);
    if let Some(description) = info.description.as_deref().filter(|d| !d.is_empty()) {
        println!("   {}", description);
    }
    if let (Some(stars), Some(forks)) = (info.stars, info.forks) {
        println!("   ⭐ {}  🍴 {}", stars, forks);
    }

    println!("\n📄 Top-level files ({}):", analysis.structure.len());
    println!("{:<50} {:>10}", "PATH", "SIZE");
    println!("{}", "=".repeat(61));
    for entry in &analysis.structure {
        println!("{:<50} {:>10}", entry.path, entry.size);
    }

    println!("\n🔑 Key files:");
    for key_file in analysis.key_files.iter() {
        let status = match &key_file.content {
            Some(content) => format!("✅ {} bytes", content.len()),
            None => "❌ not found".to_string(),
        };
        println!("   {:<20} {}", key_file.name, status);
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why Arc for the transport and the throttle?
//    - GithubClient is cheap to clone and every clone must share the SAME
//      throttle, otherwise two clones could fire requests back to back
//    - Arc<dyn HttpTransport> also lets tests plug in a fake transport
//
// 2. Why anyhow here but thiserror in github/ and docs/?
//    - The modules return typed errors callers can match on
//      (e.g. AnalyzerError::Structure { status })
//    - main only needs to add context and print one message
// -----------------------------------------------------------------------------
