//! Completion Provider Strategy Pattern
//!
//! Defines a common interface for chat-completion backends (OpenAI,
//! compatible gateways, mocks) so the suggestion engine can work with any
//! of them without code changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seo_core::provider::{CompletionProvider, GenerationOptions};
//!
//! let provider = OpenAiProvider::from_config(config);
//! let completion = provider.complete(&messages, &options).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Configuration for LLM generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "gpt-3.5-turbo", "gpt-4o-mini")
    pub model: String,

    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    1024
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text
    pub content: String,

    /// Model that generated this response
    pub model: String,

    /// Token usage statistics (if available)
    pub usage: Option<TokenUsage>,
}

/// Token usage statistics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Strategy trait for completion providers
///
/// Implement this trait to add support for new backends. The suggestion
/// generator works exclusively through this interface.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Check if the provider is available and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.temperature, 0.7);
        assert_eq!(opts.max_tokens, 1024);
        assert_eq!(opts.model, "gpt-3.5-turbo");
    }
}
