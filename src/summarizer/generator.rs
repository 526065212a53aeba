//! External text generator interface
//!
//! The `llm` algorithm hands the whole document to a hosted language model.
//! The model is not part of this crate: callers plug one in through
//! [`TextGenerator`]. Its output is fresh prose, not selected sentences, so
//! none of the extractive guarantees apply to it.

use crate::error::GenerationError;

/// Default sampling temperature for generated summaries
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
/// Output token budget granted per requested sentence
pub const DEFAULT_TOKENS_PER_SENTENCE: usize = 1024;

/// A text-in, text-out generation service
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`
    fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String, GenerationError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str, f32, usize) -> Result<String, GenerationError> + Send + Sync,
{
    fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String, GenerationError> {
        self(prompt, temperature, max_tokens)
    }
}

/// Build the summarization prompt for a document
pub fn build_prompt(text: &str) -> String {
    format!(
        "Summarize the following document concisely. Cover the main arguments, \
         key findings, important conclusions and significant data points. \
         Write clear, readable paragraphs and start directly with the content, \
         without an introductory phrase.\n\n{text}\n"
    )
}
