//! Suggestion Generator
//!
//! Orchestrates cache lookup, the retry-wrapped provider call, response
//! shaping, and cache population. Exposed to callers as a single async
//! method.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::SuggestionCache;
use crate::error::{Result, SeoError};
use crate::message::Message;
use crate::provider::{CompletionProvider, GenerationOptions};
use crate::retry::RetryPolicy;
use crate::suggestion::Suggestion;

/// System prompt for the SEO analysis call
pub const SEO_SYSTEM_PROMPT: &str =
    "You are an SEO expert. Analyze the given content and provide SEO suggestions.";

fn user_prompt(text: &str) -> String {
    format!("Analyze this content for SEO optimization: {text}")
}

/// Cached, retry-wrapped SEO suggestion engine.
///
/// Overlapping calls for the same text are not coalesced: both may reach
/// the provider and the later one wins the cache slot. Accepted behavior,
/// not a bug to guard against.
pub struct SuggestionGenerator {
    provider: Arc<dyn CompletionProvider>,
    cache: RwLock<SuggestionCache>,
    retry: RetryPolicy,
    options: GenerationOptions,
}

impl SuggestionGenerator {
    /// Create a generator with the standard cache, schedule, and options
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            cache: RwLock::new(SuggestionCache::new()),
            retry: RetryPolicy::default(),
            options: GenerationOptions::default(),
        }
    }

    /// Replace the cache (custom freshness window)
    pub fn with_cache(mut self, cache: SuggestionCache) -> Self {
        self.cache = RwLock::new(cache);
        self
    }

    /// Replace the retry policy (custom backoff schedule)
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the generation options (model, temperature, token cap)
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate an SEO suggestion for the given content.
    ///
    /// A fresh cache hit returns without any external call. On a miss (or a
    /// stale entry) the provider is invoked through the retry policy, the
    /// reply is shaped into a [`Suggestion`], and the cache entry for this
    /// exact text is overwritten.
    pub async fn generate(&self, text: &str) -> Result<Suggestion> {
        if let Some(hit) = self.cache.read().await.get(text) {
            tracing::debug!(len = text.len(), "suggestion cache hit");
            return Ok(hit);
        }

        let messages = vec![
            Message::system(SEO_SYSTEM_PROMPT),
            Message::user(user_prompt(text)),
        ];

        let completion = self
            .retry
            .run(|| self.provider.complete(&messages, &self.options))
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "suggestion generation failed"))?;

        // Only an absent reply counts as empty; a whitespace-only reply is
        // passed through into `improvements` like any other model text
        if completion.content.is_empty() {
            return Err(SeoError::EmptyResponse);
        }

        let suggestion = Suggestion::from_model_output(text, &completion.content);
        self.cache.write().await.insert(text, suggestion.clone());

        Ok(suggestion)
    }

    /// Check whether the underlying provider is reachable
    pub async fn health_check(&self) -> Result<bool> {
        self.provider.health_check().await
    }
}
