//! # seo-runtime
//!
//! Concrete completion providers for the trueviral SEO engine.
//!
//! ## Providers
//!
//! - **OpenAI** (default): chat completions over HTTPS; any
//!   OpenAI-compatible gateway works via `OPENAI_BASE_URL`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seo_runtime::OpenAiProvider;
//!
//! let provider = Arc::new(OpenAiProvider::from_env()?);
//! let generator = SuggestionGenerator::new(provider);
//! ```

pub mod openai;

pub use openai::{OpenAiConfig, OpenAiProvider};

// Re-export core types for convenience
pub use seo_core::{
    CompletionProvider, GenerationOptions, Message, Result, Role, SeoError, Suggestion,
    SuggestionGenerator,
};
