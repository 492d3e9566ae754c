// src/docs/mod.rs
// =============================================================================
// Turns a RepositoryAnalysis into written documentation.
//
// Submodules:
// - prompt: renders the analysis into a Markdown prompt
// - gemini: TextGenerator trait and the Gemini implementation
// - output: where and how the result is saved
// =============================================================================

mod gemini;
mod output;
mod prompt;

pub use gemini::{GeminiGenerator, GenerationError, TextGenerator, DEFAULT_MODEL};
pub use output::save_documentation;
pub use prompt::render_prompt;

use crate::github::RepositoryAnalysis;

/// Renders the prompt for `analysis` and asks `generator` to document it.
pub async fn generate_documentation(
    generator: &dyn TextGenerator,
    analysis: &RepositoryAnalysis,
) -> Result<String, GenerationError> {
    let prompt = render_prompt(analysis, generator.model_name());
    generator.generate(&prompt).await
}
